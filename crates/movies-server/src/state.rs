//! Application state holding the injected movie store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `SqliteStore` owns a `rusqlite::Connection`, which is
//! `!Sync`, so an async mutex is used rather than an `RwLock`; handlers
//! await the lock without blocking the tokio runtime.

use std::sync::Arc;

use movies_storage::{InMemoryStore, MovieStore, SqliteStore};

use crate::error::ApiError;

/// The store as shared between handler tasks.
pub type SharedStore = Arc<tokio::sync::Mutex<Box<dyn MovieStore + Send>>>;

/// `db_path` value that selects the in-memory backend.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database at `db_path`,
    /// or by an [`InMemoryStore`] when `db_path` is `:memory:`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        if db_path == IN_MEMORY_DB_PATH {
            tracing::info!("using in-memory movie store");
            return Ok(Self::in_memory());
        }
        let store = SqliteStore::new(db_path)?;
        tracing::info!(db_path, "using SQLite movie store");
        Ok(Self::with_store(store))
    }

    /// Creates a new `AppState` with an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(InMemoryStore::new())
    }

    /// Creates a new `AppState` around any store implementation.
    pub fn with_store<S>(store: S) -> Self
    where
        S: MovieStore + Send + 'static,
    {
        let store: Box<dyn MovieStore + Send> = Box::new(store);
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}
