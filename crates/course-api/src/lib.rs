//! Course Catalog REST API
//!
//! This crate provides the Axum-based HTTP API: public course reads,
//! registration, and Basic-authenticated course mutations.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
