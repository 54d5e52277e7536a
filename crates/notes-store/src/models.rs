//! Database models for the storage layer.
//!
//! These types map directly to database rows. They are kept separate from
//! the domain types in notes-core; conversions live here.

use notes_core::{Note, NoteId};
use sqlx::FromRow;

/// Database row for the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub title: Option<String>,
    pub content: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId(row.id),
            title: row.title,
            content: row.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_note() {
        let row = NoteRow {
            id: 3,
            title: None,
            content: "body".to_string(),
        };
        let note: Note = row.into();
        assert_eq!(note.id, NoteId(3));
        assert_eq!(note.title, None);
        assert_eq!(note.content, "body");
    }
}
