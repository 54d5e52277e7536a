//! notes-core: Note types and read-path rules for the notes service
//!
//! This crate provides:
//! - The [`Note`] entity and its [`NoteId`]
//! - Payload validation ([`NoteInput`] → [`NoteDraft`])
//! - Display-title fallback and substring search ([`title`])

pub mod title;
pub mod types;

pub use title::{DEFAULT_TAKE_N, display_title, fallback_title, matches_query};
pub use types::{Note, NoteDraft, NoteId, NoteInput, NoteValidationError};
