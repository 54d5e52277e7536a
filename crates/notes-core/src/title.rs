//! Display-title derivation and substring search rules.
//!
//! Both rules operate on stored values only; neither mutates a note.

/// Default fallback-title length when none is configured.
pub const DEFAULT_TAKE_N: usize = 20;

/// Returns the first `take_default_n` characters of `content`.
///
/// Counts Unicode scalar values, so the cut never falls inside a code point.
/// Content shorter than the limit is returned whole.
#[must_use]
pub fn fallback_title(content: &str, take_default_n: usize) -> &str {
    match content.char_indices().nth(take_default_n) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}

/// Returns `title` when present, otherwise the fallback title of `content`.
#[must_use]
pub fn display_title<'a>(title: Option<&'a str>, content: &'a str, take_default_n: usize) -> &'a str {
    title.unwrap_or_else(|| fallback_title(content, take_default_n))
}

/// Case-sensitive substring match against content or title.
///
/// An empty query matches everything. A missing title never matches.
#[must_use]
pub fn matches_query(title: Option<&str>, content: &str, query: &str) -> bool {
    content.contains(query) || title.is_some_and(|t| t.contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_shorter_than_limit() {
        assert_eq!(fallback_title("Bye", 5), "Bye");
    }

    #[test]
    fn fallback_exactly_limit() {
        assert_eq!(fallback_title("Hello", 5), "Hello");
    }

    #[test]
    fn fallback_longer_than_limit() {
        assert_eq!(fallback_title("Hello world", 5), "Hello");
    }

    #[test]
    fn fallback_counts_chars_not_bytes() {
        assert_eq!(fallback_title("Привет мир", 6), "Привет");
        assert_eq!(fallback_title("日本語のノート", 3), "日本語");
    }

    #[test]
    fn fallback_zero_limit() {
        assert_eq!(fallback_title("Hello", 0), "");
    }

    #[test]
    fn display_prefers_stored_title() {
        assert_eq!(display_title(Some("Title"), "Hello world", 5), "Title");
        assert_eq!(display_title(None, "Hello world", 5), "Hello");
    }

    #[test]
    fn query_is_case_sensitive() {
        assert!(matches_query(None, "Rust notes", "Rust"));
        assert!(!matches_query(None, "Rust notes", "rust"));
    }

    #[test]
    fn query_matches_title_only() {
        assert!(matches_query(Some("todo list"), "buy milk", "todo"));
        assert!(!matches_query(None, "buy milk", "todo"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(None, "anything", ""));
    }

    #[test]
    fn wildcard_characters_are_literal() {
        assert!(!matches_query(None, "100 percent", "100%"));
        assert!(matches_query(None, "100% done", "100%"));
        assert!(!matches_query(None, "a_b", "a%b"));
    }
}
