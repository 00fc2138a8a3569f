//! SQLite implementation of [`MovieStore`].
//!
//! [`SqliteStore`] persists movies in a SQLite database with WAL mode,
//! a transaction around every write, and automatic schema migrations.
//! Title uniqueness is enforced by a `UNIQUE` column constraint and surfaces
//! as [`StorageError::UniqueViolation`].

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::MovieStore;
use crate::types::{Movie, MovieFields, MovieFilter, MovieId};

/// SQLite-backed implementation of [`MovieStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: MovieId(row.get(0)?),
            title: row.get(1)?,
            runtime_minutes: row.get(2)?,
        })
    }

    fn select_movie(conn: &Connection, id: MovieId) -> Result<Option<Movie>, StorageError> {
        let movie = conn
            .query_row(
                "SELECT id, title, runtime_minutes FROM movies WHERE id = ?1",
                params![id.0],
                Self::row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }
}

impl MovieStore for SqliteStore {
    fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, runtime_minutes FROM movies
             WHERE (?1 IS NULL OR id = ?1) AND (?2 IS NULL OR title = ?2)
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(
            params![filter.id.map(|id| id.0), filter.title.as_deref()],
            Self::row_to_movie,
        )?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row?);
        }
        Ok(movies)
    }

    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>, StorageError> {
        Self::select_movie(&self.conn, id)
    }

    fn create_movie(&mut self, title: &str, runtime_minutes: i64) -> Result<Movie, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO movies (title, runtime_minutes) VALUES (?1, ?2)",
            params![title, runtime_minutes],
        )?;
        let id = MovieId(tx.last_insert_rowid());
        tx.commit()?;

        Ok(Movie {
            id,
            title: title.to_string(),
            runtime_minutes,
        })
    }

    fn update_movie(&mut self, id: MovieId, fields: &MovieFields) -> Result<Movie, StorageError> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE movies SET title = ?1, runtime_minutes = ?2 WHERE id = ?3",
            params![fields.title, fields.runtime_minutes, id.0],
        )?;
        if changed == 0 {
            return Err(StorageError::MovieNotFound(id.0));
        }
        let movie = Self::select_movie(&tx, id)?.ok_or(StorageError::MovieNotFound(id.0))?;
        tx.commit()?;
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, runtime_minutes: i64) -> MovieFields {
        MovieFields {
            title: title.to_string(),
            runtime_minutes,
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = SqliteStore::in_memory().unwrap();
        let created = store.create_movie("Dune", 155).unwrap();
        assert_eq!(created.id, MovieId(1));

        let loaded = store.get_movie(created.id).unwrap().unwrap();
        assert_eq!(loaded.title, "Dune");
        assert_eq!(loaded.runtime_minutes, 155);
    }

    #[test]
    fn duplicate_title_is_classified_as_unique_violation() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.create_movie("Dune", 155).unwrap();
        let err = store.create_movie("Dune", 155).unwrap_err();
        assert!(
            matches!(err, StorageError::UniqueViolation(_)),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn get_missing_movie_is_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.get_movie(MovieId(999)).unwrap().is_none());
    }

    #[test]
    fn update_replaces_all_fields() {
        let mut store = SqliteStore::in_memory().unwrap();
        let movie = store.create_movie("Dune", 155).unwrap();
        let updated = store.update_movie(movie.id, &fields("Heat", 170)).unwrap();
        assert_eq!(
            updated,
            Movie {
                id: movie.id,
                title: "Heat".into(),
                runtime_minutes: 170,
            }
        );
        assert_eq!(store.get_movie(movie.id).unwrap(), Some(updated));
    }

    #[test]
    fn update_missing_movie_fails() {
        let mut store = SqliteStore::in_memory().unwrap();
        let err = store.update_movie(MovieId(3), &fields("Heat", 170)).unwrap_err();
        assert!(matches!(err, StorageError::MovieNotFound(3)));
    }

    #[test]
    fn update_to_taken_title_fails_and_leaves_row_untouched() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.create_movie("Dune", 155).unwrap();
        let heat = store.create_movie("Heat", 170).unwrap();

        let err = store.update_movie(heat.id, &fields("Dune", 99)).unwrap_err();
        assert!(matches!(err, StorageError::UniqueViolation(_)));

        let unchanged = store.get_movie(heat.id).unwrap().unwrap();
        assert_eq!(unchanged.title, "Heat");
        assert_eq!(unchanged.runtime_minutes, 170);
    }

    #[test]
    fn list_filters_by_id_and_title() {
        let mut store = SqliteStore::in_memory().unwrap();
        let dune = store.create_movie("Dune", 155).unwrap();
        let heat = store.create_movie("Heat", 170).unwrap();

        let all = store.list_movies(&MovieFilter::default()).unwrap();
        assert_eq!(all, vec![dune.clone(), heat.clone()]);

        let by_both = MovieFilter {
            id: Some(heat.id),
            title: Some("Heat".into()),
        };
        assert_eq!(store.list_movies(&by_both).unwrap(), vec![heat]);

        let mismatched = MovieFilter {
            id: Some(dune.id),
            title: Some("Heat".into()),
        };
        assert!(store.list_movies(&mismatched).unwrap().is_empty());
    }

    #[test]
    fn file_backed_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.db");
        let path = path.to_str().unwrap();

        let id = {
            let mut store = SqliteStore::new(path).unwrap();
            store.create_movie("Alien", 117).unwrap().id
        };

        let store = SqliteStore::new(path).unwrap();
        assert_eq!(store.get_movie(id).unwrap().unwrap().title, "Alien");
    }
}
