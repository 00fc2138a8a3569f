//! Storage error types for movies-storage.
//!
//! [`StorageError`] is the typed failure hierarchy every backend reports.
//! Callers distinguish uniqueness conflicts and missing records from
//! everything else without inspecting rusqlite's error codes.

use rusqlite::ffi;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// Applying the embedded schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A uniqueness constraint was violated.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A movie with the given ID was not found.
    #[error("movie not found: {0}")]
    MovieNotFound(i64),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, msg) = &err {
            if code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE {
                return StorageError::UniqueViolation(
                    msg.clone()
                        .unwrap_or_else(|| "UNIQUE constraint failed".to_string()),
                );
            }
        }
        StorageError::Database(err)
    }
}
