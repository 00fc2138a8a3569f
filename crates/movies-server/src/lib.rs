//! HTTP/JSON API server for movie records.
//!
//! Provides a REST API to list, look up, create, and update movies stored in
//! any [`movies_storage::MovieStore`]. This crate contains the handlers, API
//! schema types, error handling, configuration, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod schema;
pub mod state;
