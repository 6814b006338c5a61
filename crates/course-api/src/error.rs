//! API error types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use course_auth::AuthFailure;
use course_core::CoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthFailure),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Collapse service errors onto the variants that map to a response
    fn normalize(self) -> Self {
        match self {
            ApiError::Core(e) => match e {
                CoreError::NotFound(msg) => ApiError::NotFound(msg),
                CoreError::BadRequest(msg) => ApiError::BadRequest(msg),
                CoreError::Validation(messages) => ApiError::Validation(messages),
                CoreError::Forbidden => ApiError::Forbidden,
                CoreError::Auth(failure) => ApiError::Auth(failure).normalize(),
                CoreError::Database(e) => ApiError::Internal(e.to_string()),
            },
            ApiError::Auth(failure) if failure.is_credential_failure() => ApiError::Unauthorized,
            ApiError::Auth(failure) => ApiError::Internal(failure.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.normalize() {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            ApiError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": messages }))
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": course_auth::ACCESS_DENIED }),
            ),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, json!({ "message": "Access denied" })),
            ApiError::RouteNotFound => {
                (StatusCode::NOT_FOUND, json!({ "message": "Route Not Found" }))
            }
            ApiError::Internal(detail) => {
                error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
            // normalize() leaves no Core or Auth variant behind
            other => {
                error!("Unmapped API error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
