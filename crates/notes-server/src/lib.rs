//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints for creating, listing, searching, reading, updating and
//!   deleting notes
//! - Display-title fallback for untitled notes on read paths
//! - JSON error responses with stable error codes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers talk to storage through `notes_store::NoteRepository`, backed by
//! PostgreSQL when `DATABASE_URL` is set and by an in-memory store otherwise.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let store = notes_server::connect_store(&config).await?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use notes_store::{MemoryStore, NoteRepository, Store, StoreConfig, StoreResult};

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Open the storage backend selected by the configuration.
pub async fn connect_store(config: &ServerConfig) -> StoreResult<Arc<dyn NoteRepository>> {
    match &config.database_url {
        Some(url) => {
            let store = Store::connect(StoreConfig::with_url(url.clone())).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, notes are kept in memory and lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
