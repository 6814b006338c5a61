//! Declarative field constraints
//!
//! Every record type that is written to the database declares its required
//! fields here. Violations are collected rather than short-circuited so a
//! client sees every problem with its payload in one response.

use crate::error::DbError;
use crate::models::{CourseChanges, NewCourse, NewUser};

/// A record that checks its own field constraints before it is persisted
pub trait Validate {
    fn validate(&self) -> Result<(), DbError>;
}

/// Accumulates constraint violations for a single record
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field must be present and contain something other than whitespace
    pub fn required(mut self, label: &str, value: Option<&str>) -> Self {
        match value {
            None => self.errors.push(format!("{} cannot be null.", label)),
            Some(v) if v.trim().is_empty() => {
                self.errors.push(format!("{} cannot be empty.", label))
            }
            Some(_) => {}
        }
        self
    }

    pub fn finish(self) -> Result<(), DbError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DbError::Validation(self.errors))
        }
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), DbError> {
        Validator::new()
            .required("FirstName", self.first_name.as_deref())
            .required("LastName", self.last_name.as_deref())
            .required("EmailAddress", self.email_address.as_deref())
            .required("Password", self.password.as_deref())
            .finish()
    }
}

impl Validate for NewCourse {
    fn validate(&self) -> Result<(), DbError> {
        Validator::new()
            .required("Title", self.title.as_deref())
            .required("Description", self.description.as_deref())
            .finish()
    }
}

impl Validate for CourseChanges {
    fn validate(&self) -> Result<(), DbError> {
        Validator::new()
            .required("Title", Some(self.title.as_str()))
            .required("Description", Some(self.description.as_str()))
            .finish()
    }
}
