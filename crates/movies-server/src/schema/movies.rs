//! Movie request/response types.
//!
//! Request types accept every field as optional so that absent or falsy
//! values can be reported with a fixed message instead of an extractor
//! rejection. The `present`/`into_*` helpers apply the presence rules.

use movies_storage::{Movie, MovieFields, MovieId};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /movies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoviesQuery {
    pub id: Option<String>,
    pub title: Option<String>,
}

impl ListMoviesQuery {
    /// Returns `(id, title)` if both are present and non-empty.
    pub fn criteria(self) -> Option<(String, String)> {
        Some((present(self.id)?, present(self.title)?))
    }
}

/// Query parameters for `GET /movies/lookup`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieLookupQuery {
    pub id: Option<String>,
}

impl MovieLookupQuery {
    /// Returns the raw ID if present and non-empty.
    pub fn id(self) -> Option<String> {
        present(self.id)
    }
}

/// Body for `POST /movies` and `PUT|PATCH /movies/{id}`.
///
/// `runtimeMins` is accepted as an alias for `runtimeMinutes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieBody {
    pub title: Option<serde_json::Value>,
    #[serde(rename = "runtimeMinutes", alias = "runtimeMins")]
    pub runtime_minutes: Option<serde_json::Value>,
}

impl MovieBody {
    /// Validates the body into storable fields.
    ///
    /// Returns `None` unless `title` is a non-empty string and
    /// `runtimeMinutes` is a positive whole number.
    pub fn into_fields(self) -> Option<MovieFields> {
        let title = match self.title? {
            serde_json::Value::String(s) if !s.is_empty() => s,
            _ => return None,
        };
        let runtime_minutes = match self.runtime_minutes? {
            serde_json::Value::Number(n) => whole_number(&n)?,
            _ => return None,
        };
        if runtime_minutes <= 0 {
            return None;
        }
        Some(MovieFields {
            title,
            runtime_minutes,
        })
    }
}

/// Response carrying a single movie.
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub movie: Movie,
}

/// Response carrying a list of movies.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
}

/// Parses a raw ID parameter. Anything but a base-10 integer yields `None`.
pub fn parse_movie_id(raw: &str) -> Option<MovieId> {
    raw.trim().parse::<i64>().ok().map(MovieId)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn whole_number(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> MovieBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn body_with_both_fields_is_valid() {
        let fields = body(json!({ "title": "Dune", "runtimeMinutes": 155 }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.title, "Dune");
        assert_eq!(fields.runtime_minutes, 155);
    }

    #[test]
    fn legacy_runtime_key_is_accepted() {
        let fields = body(json!({ "title": "Dune", "runtimeMins": 155 }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.runtime_minutes, 155);
    }

    #[test]
    fn whole_float_runtime_is_accepted() {
        let fields = body(json!({ "title": "Dune", "runtimeMinutes": 155.0 }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.runtime_minutes, 155);
    }

    #[test]
    fn falsy_or_mistyped_fields_are_missing() {
        for value in [
            json!({}),
            json!({ "title": "Dune" }),
            json!({ "runtimeMinutes": 155 }),
            json!({ "title": "", "runtimeMinutes": 155 }),
            json!({ "title": "Dune", "runtimeMinutes": 0 }),
            json!({ "title": "Dune", "runtimeMinutes": -5 }),
            json!({ "title": "Dune", "runtimeMinutes": 90.5 }),
            json!({ "title": "Dune", "runtimeMinutes": "155" }),
            json!({ "title": 42, "runtimeMinutes": 155 }),
            json!({ "title": null, "runtimeMinutes": 155 }),
        ] {
            assert!(body(value.clone()).into_fields().is_none(), "accepted {value}");
        }
    }

    #[test]
    fn list_query_needs_both_criteria() {
        let full = ListMoviesQuery {
            id: Some("1".into()),
            title: Some("Dune".into()),
        };
        assert_eq!(full.criteria(), Some(("1".into(), "Dune".into())));

        let empty_title = ListMoviesQuery {
            id: Some("1".into()),
            title: Some(String::new()),
        };
        assert!(empty_title.criteria().is_none());
        assert!(ListMoviesQuery::default().criteria().is_none());
    }

    #[test]
    fn movie_ids_parse_only_from_integers() {
        assert_eq!(parse_movie_id("12"), Some(MovieId(12)));
        assert_eq!(parse_movie_id(" 7 "), Some(MovieId(7)));
        assert_eq!(parse_movie_id("abc"), None);
        assert_eq!(parse_movie_id("1.5"), None);
    }
}
