//! HTTP handler modules for the movies API.
//!
//! Handlers parse requests, validate required fields, lock the injected
//! store, and return JSON responses. Persistence rules live in the store.

pub mod movies;
