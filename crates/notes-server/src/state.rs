//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteRepository;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note storage backend.
    store: Arc<dyn NoteRepository>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<dyn NoteRepository>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note store.
    pub fn store(&self) -> &dyn NoteRepository {
        self.store.as_ref()
    }

    /// Fallback title length for untitled notes.
    pub fn take_default_n(&self) -> usize {
        self.config.take_default_n
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}
