//! Error types for the storage layer.

use notes_core::NoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Whether this error means the requested note does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoteNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NoteNotFound(NoteId(7));
        assert_eq!(err.to_string(), "note not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_connection_is_not_not_found() {
        let err = StoreError::Connection(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
    }
}
