//! Database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// One message per violated field constraint, in declaration order
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
}

impl DbError {
    /// Validation messages, if this is a constraint violation
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            DbError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}
