//! Account routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header::LOCATION},
    routing::get,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::RequireAuth;
use super::types::{RegisterUserRequest, UserResponse};

/// GET /api/users
///
/// Returns the account behind the supplied credentials.
async fn current_user(
    RequireAuth(principal): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.current(&principal).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
///
/// Find-or-create by email address: 201 for a new account, 200 when one
/// already exists. The body is empty either way.
async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 1]), ApiError> {
    let Json(request) = payload?;
    debug!("Registration request for: {:?}", request.email_address);

    let registration = state.users.register(request.into()).await?;

    let status = if registration.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, [(LOCATION, "/")]))
}

/// Create account routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(current_user).post(register_user))
}
