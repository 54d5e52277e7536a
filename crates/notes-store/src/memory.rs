//! In-memory note storage.
//!
//! Used when no database is configured and by handler tests. Ids start at 1
//! and are never reused, matching a `BIGSERIAL` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use notes_core::{Note, NoteDraft, NoteId};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::NoteRow;
use crate::repository::NoteRepository;

#[derive(Debug)]
struct Inner {
    next_id: i64,
    notes: BTreeMap<i64, NoteRow>,
}

/// Process-local note store backed by an ordered map.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                notes: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    /// Whether the store holds no notes.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.notes.is_empty()
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_note(&self, draft: &NoteDraft) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let row = NoteRow {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        inner.notes.insert(id, row.clone());

        Ok(row.into())
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Note> {
        self.inner
            .read()
            .await
            .notes
            .get(&id.get())
            .cloned()
            .map(Note::from)
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        Ok(inner.notes.values().cloned().map(Note::from).collect())
    }

    async fn search_notes(&self, query: &str) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        Ok(inner
            .notes
            .values()
            .cloned()
            .map(Note::from)
            .filter(|note| note.matches(query))
            .collect())
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;
        let row = inner
            .notes
            .get_mut(&id.get())
            .ok_or(StoreError::NoteNotFound(id))?;

        row.title = draft.title.clone();
        row.content = draft.content.clone();

        Ok(row.clone().into())
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<Note> {
        self.inner
            .write()
            .await
            .notes
            .remove(&id.get())
            .map(Note::from)
            .ok_or(StoreError::NoteNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str, title: Option<&str>) -> NoteDraft {
        NoteDraft::new(content, title.map(str::to_string)).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.insert_note(&draft("a", None)).await.unwrap();
        let b = store.insert_note(&draft("b", Some("B"))).await.unwrap();

        assert_eq!(a.id, NoteId(1));
        assert_eq!(b.id, NoteId(2));
        assert_eq!(b.title.as_deref(), Some("B"));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert_note(&draft("a", None)).await.unwrap();
        store.delete_note(a.id).await.unwrap();
        let b = store.insert_note(&draft("b", None)).await.unwrap();

        assert_eq!(b.id, NoteId(2));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_note(NoteId(99)).await.unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound(NoteId(99))));
    }

    #[tokio::test]
    async fn test_get_does_not_derive_title() {
        let store = MemoryStore::new();
        let note = store.insert_note(&draft("Hello world", None)).await.unwrap();

        let fetched = store.get_note(note.id).await.unwrap();
        assert_eq!(fetched.title, None);
    }

    #[tokio::test]
    async fn test_search_matches_content_or_title() {
        let store = MemoryStore::new();
        store.insert_note(&draft("buy milk", Some("errands"))).await.unwrap();
        store.insert_note(&draft("call mom", None)).await.unwrap();
        store.insert_note(&draft("read book", Some("Milk run"))).await.unwrap();

        let hits = store.search_notes("milk").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "buy milk");

        let hits = store.search_notes("Milk").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("Milk run"));

        let hits = store.search_notes("").await.unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn test_update_replaces_both_fields() {
        let store = MemoryStore::new();
        let note = store.insert_note(&draft("old", Some("title"))).await.unwrap();

        let updated = store.update_note(note.id, &draft("new", None)).await.unwrap();
        assert_eq!(updated.content, "new");
        assert_eq!(updated.title, None);

        let fetched = store.get_note(note.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = MemoryStore::new();
        let note = store.insert_note(&draft("keep", None)).await.unwrap();

        let err = store.update_note(NoteId(42), &draft("x", None)).await.unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(store.list_notes().await.unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn test_delete_returns_last_values() {
        let store = MemoryStore::new();
        let note = store.insert_note(&draft("bye", Some("t"))).await.unwrap();

        let deleted = store.delete_note(note.id).await.unwrap();
        assert_eq!(deleted, note);
        assert!(store.is_empty().await);
        assert!(store.delete_note(note.id).await.unwrap_err().is_not_found());
    }
}
