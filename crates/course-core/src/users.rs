//! User registration and lookup

use course_auth::{AuthFailure, PasswordHasher, Principal, UserDirectory};
use course_db::{NewUser, User};
use tracing::info;

use crate::error::CoreError;

/// Registration fields a client may submit
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    /// Plaintext; hashed before it reaches the directory
    pub password: Option<String>,
}

/// Result of a registration attempt
#[derive(Debug, Clone)]
pub enum Registration {
    Created(User),
    /// An account with this email address already existed; nothing was written
    Existing(User),
}

impl Registration {
    pub fn user(&self) -> &User {
        match self {
            Registration::Created(user) | Registration::Existing(user) => user,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Registration::Created(_))
    }
}

/// User account operations
pub struct UserService<D> {
    directory: D,
    hasher: PasswordHasher,
}

impl<D: UserDirectory> UserService<D> {
    pub fn new(directory: D, hasher: PasswordHasher) -> Self {
        Self { directory, hasher }
    }

    /// Find or create an account keyed by email address
    ///
    /// The existence check and the insert are separate statements; two
    /// simultaneous registrations for one address can both succeed.
    pub async fn register(&self, input: RegistrationInput) -> Result<Registration, CoreError> {
        // A missing address is looked up and stored as empty, so it is
        // reported as empty rather than null.
        let email = input.email_address.unwrap_or_default();

        if !email.is_empty()
            && let Some(existing) = self.directory.find_by_identifier(&email).await?
        {
            info!(
                "There is an already existing account with the following email address: {}",
                existing.email_address
            );
            return Ok(Registration::Existing(existing));
        }

        // Empty or missing passwords pass through unhashed so the field
        // constraints report them.
        let password = match input.password {
            Some(plain) if !plain.is_empty() => Some(self.hasher.hash(&plain)?),
            other => other,
        };

        let user = self
            .directory
            .create(NewUser {
                first_name: input.first_name,
                last_name: input.last_name,
                email_address: Some(email),
                password,
            })
            .await?;

        info!("New user {} successfully created", user.id);
        Ok(Registration::Created(user))
    }

    /// Re-read the account behind a principal
    pub async fn current(&self, principal: &Principal) -> Result<User, CoreError> {
        self.directory
            .find_by_id(principal.id())
            .await?
            .ok_or(CoreError::Auth(AuthFailure::UserNotFound))
    }
}
