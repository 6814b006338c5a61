//! Course Catalog Database Layer
//!
//! This crate provides the persistence layer for the course catalog,
//! using SQLite via sqlx for users and the courses they own.

pub mod error;
pub mod models;
pub mod repository;
pub mod utils;
pub mod validation;

pub use error::DbError;
pub use models::*;
pub use repository::Database;
pub use validation::Validate;
