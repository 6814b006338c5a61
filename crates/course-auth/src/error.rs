//! Authentication error types

use thiserror::Error;

/// The single message every rejected credential receives
pub const ACCESS_DENIED: &str = "Access Denied";

#[derive(Error, Debug)]
pub enum AuthFailure {
    #[error("Auth header not found")]
    HeaderMissing,

    #[error("User not found")]
    UserNotFound,

    #[error("Password mismatch")]
    PasswordMismatch,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("User directory error: {0}")]
    Directory(#[from] course_db::DbError),
}

impl AuthFailure {
    /// True for the failures caused by the caller's credentials, as opposed
    /// to a fault inside the service
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            AuthFailure::HeaderMissing | AuthFailure::UserNotFound | AuthFailure::PasswordMismatch
        )
    }

    /// Short machine-readable name, used for logs and metric labels
    pub fn reason(&self) -> &'static str {
        match self {
            AuthFailure::HeaderMissing => "header_missing",
            AuthFailure::UserNotFound => "user_not_found",
            AuthFailure::PasswordMismatch => "password_mismatch",
            AuthFailure::PasswordHash(_) => "password_hash",
            AuthFailure::Directory(_) => "directory",
        }
    }
}
