//! Course Catalog Authentication and Authorization
//!
//! This crate verifies HTTP Basic credentials against stored Argon2 hashes
//! and decides whether an authenticated principal may mutate a resource
//! it owns.

pub mod authenticator;
pub mod basic;
pub mod directory;
pub mod error;
pub mod guard;
pub mod password;
pub mod principal;

pub use authenticator::Authenticator;
pub use basic::{BasicCredentials, parse_basic_credentials};
pub use directory::UserDirectory;
pub use error::{ACCESS_DENIED, AuthFailure};
pub use guard::{Access, authorize};
pub use password::{HashingParams, PasswordHasher};
pub use principal::Principal;
