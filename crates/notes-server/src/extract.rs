//! Request extractors that report rejections as JSON `ApiError`s.
//!
//! Axum's stock `Json`, `Path` and `Query` extractors answer malformed input
//! with a plain-text body (and 422 for JSON that does not fit the type).
//! These wrappers turn every rejection into a 400 with the usual error
//! envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use notes_core::{NoteId, NoteInput};
use serde::Deserialize;

use crate::error::ApiError;

/// JSON body of a create or update request.
///
/// Only the JSON shape is checked here; content rules are applied by
/// [`NoteInput::validate`] in the handler.
#[derive(Debug)]
pub struct NotePayload(pub NoteInput);

impl<S> FromRequest<S> for NotePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<NoteInput>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected note payload");
                ApiError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(input))
    }
}

/// The `{id}` segment of `/notes/{id}`.
#[derive(Debug, Clone, Copy)]
pub struct NotePath(pub NoteId);

impl<S> FromRequestParts<S> for NotePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(NoteId(id)))
    }
}

/// Raw query string of `GET /notes`.
#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: Option<String>,
}

/// The `?query=` filter of `GET /notes`.
///
/// Holds `None` when the parameter is absent or empty, which means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSearch(pub Option<String>);

impl NoteSearch {
    /// The search term, if one was given.
    pub fn term(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for NoteSearch
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SearchParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected search query");
                ApiError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(params.query.filter(|q| !q.is_empty())))
    }
}
