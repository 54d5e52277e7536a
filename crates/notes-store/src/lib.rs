//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - PostgreSQL storage for notes
//! - An in-memory store for development and tests
//! - Migration management
//! - The [`NoteRepository`] trait the HTTP layer is written against
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteRepository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let draft = NoteDraft::new("Hello world", None)?;
//! let note = store.insert_note(&draft).await?;
//! let notes = store.search_notes("Hello").await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::NoteRow;
pub use repository::NoteRepository;
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
