//! Core error types

use course_auth::AuthFailure;
use course_db::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(DbError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthFailure),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden")]
    Forbidden,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
}

impl From<DbError> for CoreError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation(messages) => CoreError::Validation(messages),
            other => CoreError::Database(other),
        }
    }
}
