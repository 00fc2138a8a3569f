//! In-memory implementation of [`MovieStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral runs, and
//! anywhere persistence isn't needed. It keeps movies in a BTreeMap with
//! identical semantics to the SQLite backend.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::MovieStore;
use crate::types::{Movie, MovieFields, MovieFilter, MovieId};

/// In-memory implementation of [`MovieStore`].
///
/// IDs are allocated from a monotonically increasing counter starting at 1
/// and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    movies: BTreeMap<MovieId, Movie>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        InMemoryStore {
            movies: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Fails if a movie other than `except` already holds `title`.
    fn check_title_free(&self, title: &str, except: Option<MovieId>) -> Result<(), StorageError> {
        let taken = self
            .movies
            .values()
            .any(|m| m.title == title && Some(m.id) != except);
        if taken {
            return Err(StorageError::UniqueViolation(format!(
                "movies.title: '{}'",
                title
            )));
        }
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore for InMemoryStore {
    fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StorageError> {
        Ok(self
            .movies
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>, StorageError> {
        Ok(self.movies.get(&id).cloned())
    }

    fn create_movie(&mut self, title: &str, runtime_minutes: i64) -> Result<Movie, StorageError> {
        self.check_title_free(title, None)?;

        let id = MovieId(self.next_id);
        self.next_id += 1;

        let movie = Movie {
            id,
            title: title.to_string(),
            runtime_minutes,
        };
        self.movies.insert(id, movie.clone());
        Ok(movie)
    }

    fn update_movie(&mut self, id: MovieId, fields: &MovieFields) -> Result<Movie, StorageError> {
        if !self.movies.contains_key(&id) {
            return Err(StorageError::MovieNotFound(id.0));
        }
        self.check_title_free(&fields.title, Some(id))?;

        let movie = self
            .movies
            .get_mut(&id)
            .ok_or(StorageError::MovieNotFound(id.0))?;
        movie.title = fields.title.clone();
        movie.runtime_minutes = fields.runtime_minutes;
        Ok(movie.clone())
    }
}
