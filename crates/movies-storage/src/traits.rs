//! The [`MovieStore`] trait defining the storage contract for movies.
//!
//! All backends (InMemoryStore, SqliteStore, test fakes) implement this
//! trait, so the HTTP layer can be handed any of them without changing
//! handler logic.

use crate::error::StorageError;
use crate::types::{Movie, MovieFields, MovieFilter, MovieId};

/// The storage contract for movie records.
///
/// The trait is synchronous; callers that share a store across async tasks
/// wrap it in an async mutex.
pub trait MovieStore {
    /// Lists all movies matching `filter`, ordered by ascending ID.
    fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StorageError>;

    /// Retrieves a movie by ID, or `None` if no such movie is stored.
    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>, StorageError>;

    /// Creates a new movie and returns it with its allocated ID.
    ///
    /// Fails with [`StorageError::UniqueViolation`] if the title is taken.
    fn create_movie(&mut self, title: &str, runtime_minutes: i64) -> Result<Movie, StorageError>;

    /// Replaces the title and runtime of an existing movie.
    ///
    /// Fails with [`StorageError::MovieNotFound`] if `id` is not stored, and
    /// with [`StorageError::UniqueViolation`] if another movie already holds
    /// the new title.
    fn update_movie(&mut self, id: MovieId, fields: &MovieFields) -> Result<Movie, StorageError>;
}
