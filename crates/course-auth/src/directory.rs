//! User directory trait

use async_trait::async_trait;
use course_db::{Database, DbError, NewUser, User};

/// Lookup and creation of user accounts
///
/// The authenticator only needs to find accounts; registration also
/// creates them. Implemented by the database, and by in-memory fakes in
/// tests.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by login identifier (email address)
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbError>;

    /// Find a user by primary key
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Create a user; the password must already be hashed
    async fn create(&self, user: NewUser) -> Result<User, DbError>;
}

#[async_trait]
impl UserDirectory for Database {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbError> {
        self.get_user_by_email(identifier).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        self.get_user_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        self.insert_user(user).await
    }
}
