//! Basic authentication against the user directory

use tracing::{error, info, warn};

use crate::basic::parse_basic_credentials;
use crate::directory::UserDirectory;
use crate::error::AuthFailure;
use crate::password::PasswordHasher;
use crate::principal::Principal;

/// Verifies Basic credentials and resolves them to a [`Principal`]
pub struct Authenticator<D> {
    directory: D,
    hasher: PasswordHasher,
    /// Verified against when the identifier is unknown, so that an unknown
    /// email costs as much as a wrong password
    decoy_hash: String,
}

impl<D: UserDirectory> Authenticator<D> {
    pub fn new(directory: D, hasher: PasswordHasher) -> Result<Self, AuthFailure> {
        let decoy_hash = hasher.hash("decoy password for unknown accounts")?;
        Ok(Self {
            directory,
            hasher,
            decoy_hash,
        })
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// Reads only; running it twice against the same state gives the same
    /// answer.
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Principal, AuthFailure> {
        let result = self.resolve(authorization).await;

        match &result {
            Ok(principal) => {
                info!(
                    user_id = principal.id(),
                    "Authentication successful for user with email address: {}",
                    principal.user().email_address
                );
            }
            Err(e) if e.is_credential_failure() => {
                warn!(reason = e.reason(), "Authentication failed: {}", e);
            }
            Err(e) => {
                error!(reason = e.reason(), "Authentication could not complete: {}", e);
            }
        }

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.reason(),
        };
        metrics::counter!("course_api_auth_attempts_total", "outcome" => outcome).increment(1);

        result
    }

    async fn resolve(&self, authorization: Option<&str>) -> Result<Principal, AuthFailure> {
        let credentials =
            parse_basic_credentials(authorization).ok_or(AuthFailure::HeaderMissing)?;

        let user = match self
            .directory
            .find_by_identifier(&credentials.identifier)
            .await?
        {
            Some(user) => user,
            None => {
                let _ = self.hasher.verify(&credentials.secret, &self.decoy_hash);
                return Err(AuthFailure::UserNotFound);
            }
        };

        if !self.hasher.verify(&credentials.secret, &user.password) {
            return Err(AuthFailure::PasswordMismatch);
        }

        Ok(Principal::new(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::HashingParams;
    use async_trait::async_trait;
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use chrono::Utc;
    use course_db::{DbError, NewUser, User};
    use std::sync::Mutex;

    /// In-memory directory
    #[derive(Default)]
    struct MemoryDirectory {
        users: Mutex<Vec<User>>,
        fail: bool,
    }

    #[async_trait]
    impl UserDirectory for MemoryDirectory {
        async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbError> {
            if self.fail {
                return Err(DbError::Connection(sqlx_unavailable()));
            }
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email_address == identifier).cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn create(&self, user: NewUser) -> Result<User, DbError> {
            let mut users = self.users.lock().unwrap();
            let created = User {
                id: users.len() as i64 + 1,
                first_name: user.first_name.unwrap_or_default(),
                last_name: user.last_name.unwrap_or_default(),
                email_address: user.email_address.unwrap_or_default(),
                password: user.password.unwrap_or_default(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            users.push(created.clone());
            Ok(created)
        }
    }

    fn sqlx_unavailable() -> sqlx::Error {
        sqlx::Error::PoolClosed
    }

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(HashingParams {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    async fn authenticator_with_user(email: &str, password: &str) -> (Authenticator<MemoryDirectory>, i64) {
        let hasher = hasher();
        let directory = MemoryDirectory::default();
        let user = directory
            .create(NewUser {
                first_name: Some("Joe".to_string()),
                last_name: Some("Smith".to_string()),
                email_address: Some(email.to_string()),
                password: Some(hasher.hash(password).unwrap()),
            })
            .await
            .unwrap();
        (Authenticator::new(directory, hasher).unwrap(), user.id)
    }

    fn basic(email: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
    }

    #[tokio::test]
    async fn test_valid_credentials_yield_principal() {
        let (auth, id) = authenticator_with_user("a@x.com", "secret1").await;

        let principal = auth
            .authenticate(Some(&basic("a@x.com", "secret1")))
            .await
            .unwrap();
        assert_eq!(principal.id(), id);
        assert_eq!(principal.user().email_address, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header() {
        let (auth, _) = authenticator_with_user("a@x.com", "secret1").await;

        for header in [None, Some("Basic !!!"), Some("Bearer token")] {
            let err = auth.authenticate(header).await.unwrap_err();
            assert!(matches!(err, AuthFailure::HeaderMissing));
        }
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (auth, _) = authenticator_with_user("a@x.com", "secret1").await;

        let err = auth
            .authenticate(Some(&basic("b@x.com", "secret1")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthFailure::UserNotFound));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let (auth, _) = authenticator_with_user("a@x.com", "secret1").await;

        let err = auth
            .authenticate(Some(&basic("a@x.com", "secret2")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthFailure::PasswordMismatch));
    }

    #[tokio::test]
    async fn test_authentication_is_repeatable() {
        let (auth, id) = authenticator_with_user("a@x.com", "secret1").await;
        let header = basic("a@x.com", "secret1");

        for _ in 0..3 {
            assert_eq!(auth.authenticate(Some(&header)).await.unwrap().id(), id);
        }
        assert_eq!(auth.directory().users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_directory_failure_is_not_a_credential_failure() {
        let directory = MemoryDirectory {
            fail: true,
            ..Default::default()
        };
        let auth = Authenticator::new(directory, hasher()).unwrap();

        let err = auth
            .authenticate(Some(&basic("a@x.com", "secret1")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthFailure::Directory(_)));
        assert!(!err.is_credential_failure());
    }
}
