//! Core data types for the notes service.
//!
//! A note is the only entity: a store-assigned integer id, an optional
//! title and a required, non-empty content body. Read paths show a
//! *display title* that falls back to a prefix of the content when no
//! title was stored (see [`crate::title`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::title;

// ============================================================================
// ID Types
// ============================================================================

/// Store-assigned identifier of a note.
///
/// Immutable after creation and unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    /// Returns the raw integer key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A persisted note.
///
/// `title` is `None` when the author gave no title. On read paths the
/// service replaces it with the display title via [`Note::with_display_title`];
/// that derived value is never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: Option<String>,
    pub content: String,
}

impl Note {
    /// Returns the title shown to readers: the stored title, or the first
    /// `take_default_n` characters of the content.
    #[must_use]
    pub fn display_title(&self, take_default_n: usize) -> &str {
        title::display_title(self.title.as_deref(), &self.content, take_default_n)
    }

    /// Consumes the note and fills in the display title.
    #[must_use]
    pub fn with_display_title(mut self, take_default_n: usize) -> Self {
        if self.title.is_none() {
            self.title = Some(self.display_title(take_default_n).to_string());
        }
        self
    }

    /// Whether the stored content or stored title contains `query`.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        title::matches_query(self.title.as_deref(), &self.content, query)
    }
}

// ============================================================================
// Input / Validation
// ============================================================================

/// Create or update payload as received from a client.
///
/// Both fields are optional at this stage so a missing `content` can be
/// reported as a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteInput {
    /// Creates an input with content and an optional title.
    pub fn new(content: impl Into<String>, title: Option<String>) -> Self {
        Self {
            title,
            content: Some(content.into()),
        }
    }

    /// Validates the payload and normalizes it for storage.
    ///
    /// Content must be present and non-empty. An empty title becomes `None`.
    /// Neither field may contain a NUL character, which text columns reject.
    pub fn validate(self) -> Result<NoteDraft, NoteValidationError> {
        let content = match self.content {
            Some(content) if !content.is_empty() => content,
            Some(_) => return Err(NoteValidationError::EmptyContent),
            None => return Err(NoteValidationError::MissingContent),
        };
        if content.contains('\0') {
            return Err(NoteValidationError::NulCharacter("content"));
        }

        let title = self.title.filter(|t| !t.is_empty());
        if title.as_deref().is_some_and(|t| t.contains('\0')) {
            return Err(NoteValidationError::NulCharacter("title"));
        }

        Ok(NoteDraft { title, content })
    }
}

/// A validated note body, ready to be inserted or to replace an existing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: String,
}

impl NoteDraft {
    /// Builds a draft directly, applying the same rules as [`NoteInput::validate`].
    pub fn new(
        content: impl Into<String>,
        title: Option<String>,
    ) -> Result<Self, NoteValidationError> {
        NoteInput::new(content, title).validate()
    }
}

/// Reasons a note payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteValidationError {
    /// The `content` field was absent.
    #[error("content must be provided")]
    MissingContent,

    /// The `content` field was an empty string.
    #[error("content must not be empty")]
    EmptyContent,

    /// A field contained a NUL character.
    #[error("{0} must not contain NUL characters")]
    NulCharacter(&'static str),
}
