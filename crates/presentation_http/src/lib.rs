//! DailyCast HTTP presentation layer
//!
//! This crate provides the HTTP API for DailyCast.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestIdLayer, ValidatedQuery, ValidationError};
pub use routes::{cors_layer, create_router};
pub use state::AppState;
