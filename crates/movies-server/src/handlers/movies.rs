//! Movie handlers (list, lookup, create, update).
//!
//! Each handler validates presence of its required fields before touching
//! the store, issues the store call(s), and translates store errors with an
//! operation-specific conflict message.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use movies_storage::{MovieFilter, StorageError};

use crate::error::ApiError;
use crate::schema::movies::{
    parse_movie_id, ListMoviesQuery, MovieBody, MovieListResponse, MovieLookupQuery,
    MovieResponse,
};
use crate::state::AppState;

pub const MISSING_QUERY_FIELDS: &str = "Missing fields in query parameters";
pub const MISSING_BODY_FIELDS: &str = "Missing fields in request body";
pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const MOVIE_DOES_NOT_EXIST: &str = "This movie does not exist";
pub const DUPLICATE_TITLE: &str = "A movie with the same title already exists";

/// Lists movies matching both `id` and `title`.
///
/// `GET /movies?id=..&title=..`
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<ListMoviesQuery>, QueryRejection>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let Some((raw_id, title)) = query.ok().and_then(|Query(q)| q.criteria()) else {
        return Err(ApiError::BadRequest(MISSING_QUERY_FIELDS.to_string()));
    };
    let Some(id) = parse_movie_id(&raw_id) else {
        return Ok(Json(MovieListResponse { movies: Vec::new() }));
    };

    let filter = MovieFilter {
        id: Some(id),
        title: Some(title),
    };
    let store = state.store.lock().await;
    let movies = store
        .list_movies(&filter)
        .map_err(|e| translate(e, MOVIE_DOES_NOT_EXIST))?;
    tracing::debug!(count = movies.len(), "listed movies");
    Ok(Json(MovieListResponse { movies }))
}

/// Looks up a single movie.
///
/// `GET /movies/lookup?id=..`
pub async fn get_movie_by_id(
    State(state): State<AppState>,
    query: Result<Query<MovieLookupQuery>, QueryRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Some(raw_id) = query.ok().and_then(|Query(q)| q.id()) else {
        return Err(ApiError::BadRequest(MISSING_QUERY_FIELDS.to_string()));
    };
    let Some(id) = parse_movie_id(&raw_id) else {
        return Err(ApiError::NotFound(MOVIE_NOT_FOUND.to_string()));
    };

    let store = state.store.lock().await;
    let movie = store
        .get_movie(id)
        .map_err(|e| translate(e, MOVIE_DOES_NOT_EXIST))?
        .ok_or_else(|| ApiError::NotFound(MOVIE_NOT_FOUND.to_string()))?;
    Ok(Json(MovieResponse { movie }))
}

/// Creates a movie.
///
/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<MovieBody>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let Some(fields) = body.ok().and_then(|Json(b)| b.into_fields()) else {
        return Err(ApiError::BadRequest(MISSING_BODY_FIELDS.to_string()));
    };

    let mut store = state.store.lock().await;
    let movie = store
        .create_movie(&fields.title, fields.runtime_minutes)
        .map_err(|e| translate(e, DUPLICATE_TITLE))?;
    tracing::info!(id = movie.id.0, title = %movie.title, "created movie");
    Ok((StatusCode::CREATED, Json(MovieResponse { movie })))
}

/// Replaces the title and runtime of an existing movie.
///
/// `PUT /movies/{id}` and `PATCH /movies/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<MovieBody>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let fields = match body.ok().and_then(|Json(b)| b.into_fields()) {
        Some(fields) if !raw_id.is_empty() => fields,
        _ => return Err(ApiError::BadRequest(MISSING_BODY_FIELDS.to_string())),
    };
    let Some(id) = parse_movie_id(&raw_id) else {
        return Err(ApiError::NotFound(MOVIE_NOT_FOUND.to_string()));
    };

    // Held across lookup and write so no other request interleaves.
    let mut store = state.store.lock().await;
    if store
        .get_movie(id)
        .map_err(|e| translate(e, MOVIE_DOES_NOT_EXIST))?
        .is_none()
    {
        return Err(ApiError::NotFound(MOVIE_NOT_FOUND.to_string()));
    }

    let movie = store
        .update_movie(id, &fields)
        .map_err(|e| translate(e, MOVIE_DOES_NOT_EXIST))?;
    tracing::info!(id = movie.id.0, title = %movie.title, "updated movie");
    Ok(Json(MovieResponse { movie }))
}

/// Maps a store failure to the response for one operation.
///
/// Uniqueness conflicts carry the operation's `conflict_message`; anything
/// unclassified exposes the store's own message.
fn translate(err: StorageError, conflict_message: &str) -> ApiError {
    match err {
        StorageError::UniqueViolation(detail) => {
            tracing::warn!(%detail, "unique constraint violated");
            ApiError::Conflict(conflict_message.to_string())
        }
        StorageError::MovieNotFound(id) => {
            tracing::debug!(id, "movie disappeared before write");
            ApiError::NotFound(MOVIE_NOT_FOUND.to_string())
        }
        other => {
            tracing::error!(error = %other, "movie store failure");
            ApiError::InternalError(other.to_string())
        }
    }
}
