//! Note routes.
//!
//! This module implements the note HTTP endpoints:
//! - POST /notes - Create a note
//! - GET /notes - List notes, optionally filtered by `?query=`
//! - GET /notes/{id} - Fetch one note
//! - PUT /notes/{id} - Replace a note's title and content
//! - DELETE /notes/{id} - Delete a note
//!
//! Read paths return the display title: the stored title, or the first
//! `TAKE_DEFAULT_N` characters of the content when no title was stored.
//! Write paths return the note exactly as stored.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use notes_core::Note;
use notes_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::extract::{NotePath, NotePayload, NoteSearch};
use crate::state::AppState;

// ============================================================================
// Helper Functions
// ============================================================================

/// Map a store failure to an API error, logging anything that is not a
/// plain miss.
fn store_error(action: &'static str) -> impl Fn(StoreError) -> ApiError {
    move |e| {
        if !e.is_not_found() {
            tracing::error!(error = %e, "Failed to {}", action);
        }
        ApiError::from(e)
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "optional", "content": "required" }`
///
/// # Response
///
/// - 201 Created: the stored note
/// - 400 Bad Request: missing or empty content, malformed body
async fn create_note(
    State(state): State<AppState>,
    NotePayload(input): NotePayload,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let draft = input.validate()?;

    let note = state
        .store()
        .insert_note(&draft)
        .await
        .map_err(store_error("create note"))?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes - List notes.
///
/// With a non-empty `query`, only notes whose content or title contains it
/// (case-sensitive) are returned.
async fn list_notes(
    State(state): State<AppState>,
    search: NoteSearch,
) -> ApiResult<Json<Vec<Note>>> {
    let store = state.store();

    let notes = match search.term() {
        Some(query) => store
            .search_notes(query)
            .await
            .map_err(store_error("search notes"))?,
        None => store.list_notes().await.map_err(store_error("list notes"))?,
    };

    let take_default_n = state.take_default_n();
    let notes: Vec<Note> = notes
        .into_iter()
        .map(|note| note.with_display_title(take_default_n))
        .collect();

    tracing::debug!(
        count = notes.len(),
        query = search.term().unwrap_or_default(),
        "Listed notes"
    );

    Ok(Json(notes))
}

/// GET /notes/{id} - Fetch a note with its display title.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: no note with this id
async fn get_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> ApiResult<Json<Note>> {
    let note = state
        .store()
        .get_note(id)
        .await
        .map_err(store_error("fetch note"))?;

    Ok(Json(note.with_display_title(state.take_default_n())))
}

/// PUT /notes/{id} - Replace title and content.
///
/// The note must exist before the body is validated, so an unknown id is
/// always 404.
///
/// # Response
///
/// - 200 OK: the updated note as stored
/// - 400 Bad Request: missing or empty content
/// - 404 Not Found: no note with this id
async fn update_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
    NotePayload(input): NotePayload,
) -> ApiResult<Json<Note>> {
    let store = state.store();

    store.get_note(id).await.map_err(store_error("fetch note"))?;

    let draft = input.validate()?;

    let note = store
        .update_note(id, &draft)
        .await
        .map_err(store_error("update note"))?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 200 OK: the deleted note's last values
/// - 404 Not Found: no note with this id
async fn delete_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> ApiResult<Json<Note>> {
    let note = state
        .store()
        .delete_note(id)
        .await
        .map_err(store_error("delete note"))?;

    tracing::info!(note_id = %note.id, "Note deleted");

    Ok(Json(note))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
