//! Repository trait providing domain-typed access to note storage.
//!
//! Handlers depend on [`NoteRepository`] rather than a concrete backend so
//! the server can run on PostgreSQL ([`Store`]) or in memory
//! ([`crate::MemoryStore`]).

use async_trait::async_trait;
use notes_core::{Note, NoteDraft, NoteId};

use crate::Store;
use crate::error::StoreResult;

/// CRUD over notes by integer key, plus full scan and substring filter.
#[async_trait]
pub trait NoteRepository: Send + Sync + std::fmt::Debug {
    /// Short name of the backend, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Insert a note and return it with its assigned id.
    async fn insert_note(&self, draft: &NoteDraft) -> StoreResult<Note>;

    /// Fetch one note. Fails with `NoteNotFound` if absent.
    async fn get_note(&self, id: NoteId) -> StoreResult<Note>;

    /// Every stored note.
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;

    /// Notes whose stored content or title contains `query` (case-sensitive).
    async fn search_notes(&self, query: &str) -> StoreResult<Vec<Note>>;

    /// Replace title and content. Fails with `NoteNotFound` if absent.
    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Note>;

    /// Remove a note and return its last values. Fails with `NoteNotFound` if absent.
    async fn delete_note(&self, id: NoteId) -> StoreResult<Note>;
}

#[async_trait]
impl NoteRepository for Store {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert_note(&self, draft: &NoteDraft) -> StoreResult<Note> {
        Store::insert_note(self, draft).await.map(Note::from)
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Note> {
        Store::get_note(self, id).await.map(Note::from)
    }

    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = Store::list_notes(self).await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn search_notes(&self, query: &str) -> StoreResult<Vec<Note>> {
        let rows = Store::search_notes(self, query).await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Note> {
        Store::update_note(self, id, draft).await.map(Note::from)
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<Note> {
        Store::delete_note(self, id).await.map(Note::from)
    }
}
