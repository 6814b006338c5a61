//! Course Catalog Core Business Logic
//!
//! This crate provides the course and user services: registration, public
//! course reads, and course mutations that only the owning user may apply.

pub mod courses;
pub mod error;
pub mod users;

pub use courses::{CourseInput, CourseService};
pub use error::CoreError;
pub use users::{Registration, RegistrationInput, UserService};
