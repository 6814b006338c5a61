//! API routes

mod auth;
mod courses;
mod health;
pub mod metrics;
mod types;
mod users;

use axum::Router;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::{AppState, MetricsHandle};

pub use auth::RequireAuth;

/// Fallback for anything no route matched
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Create the main router
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let mut router = Router::new()
        // Welcome and health checks
        .merge(health::routes())
        // Accounts
        .merge(users::routes())
        // Courses
        .merge(courses::routes())
        .with_state(state);

    // Add metrics endpoint if handle is provided
    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::routes(handle));
    }

    router.fallback(route_not_found)
}
