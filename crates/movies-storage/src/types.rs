//! Storage-layer types for movie identity and content.
//!
//! [`MovieId`] lives here because identity is a storage concern: a movie
//! only gains an ID when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored movie.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`, and the
/// newtype serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieId({})", self.0)
    }
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub runtime_minutes: i64,
}

/// Replacement content for an existing movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieFields {
    pub title: String,
    pub runtime_minutes: i64,
}

/// Equality filter for listing movies.
///
/// A movie matches when every criterion that is `Some` equals the stored
/// value. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub id: Option<MovieId>,
    pub title: Option<String>,
}

impl MovieFilter {
    /// Returns true if `movie` satisfies every present criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.id.map_or(true, |id| id == movie.id)
            && self.title.as_deref().map_or(true, |t| t == movie.title)
    }
}
