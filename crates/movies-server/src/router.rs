//! Router assembly for the movies HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. The static `/movies/lookup`
/// segment takes precedence over `/movies/{id}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/movies",
            get(handlers::movies::list_movies).post(handlers::movies::create_movie),
        )
        .route("/movies/lookup", get(handlers::movies::get_movie_by_id))
        .route(
            "/movies/{id}",
            put(handlers::movies::update_movie).patch(handlers::movies::update_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
