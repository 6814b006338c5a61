//! User operations

use chrono::Utc;
use sqlx::Row;

use crate::error::DbError;
use crate::models::{NewUser, User};
use crate::repository::Database;
use crate::validation::Validate;

impl Database {
    // ==================== User Operations ====================

    /// Insert a new user
    ///
    /// The password must already be hashed. Field constraints are checked
    /// before anything is written.
    pub async fn insert_user(&self, user: NewUser) -> Result<User, DbError> {
        user.validate()?;

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user.first_name.as_deref())
        .bind(user.last_name.as_deref())
        .bind(user.email_address.as_deref())
        .bind(user.password.as_deref())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = result.get("id");

        Ok(User {
            id,
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            email_address: user.email_address.unwrap_or_default(),
            password: user.password.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a user by email address
    ///
    /// Email is not unique at the storage level; the oldest account wins.
    pub async fn get_user_by_email(&self, email_address: &str) -> Result<Option<User>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email_address, password, created_at, updated_at
            FROM users
            WHERE email_address = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email_address)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| User::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email_address, password, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| User::try_from(&row).map_err(DbError::from)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email_address: Some(email.to_string()),
            password: Some("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup_user() {
        let db = Database::in_memory().await.unwrap();

        let user = db.insert_user(new_user("ada@example.com")).await.unwrap();
        assert!(user.id > 0);

        let by_email = db.get_user_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.first_name, "Ada");

        let by_id = db.get_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email_address, "ada@example.com");

        assert!(db.get_user_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(db.get_user_by_id(user.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_user_rejects_invalid_fields() {
        let db = Database::in_memory().await.unwrap();

        let mut user = new_user("");
        user.password = None;

        let err = db.insert_user(user).await.unwrap_err();
        assert_eq!(
            err.validation_messages().unwrap(),
            &["EmailAddress cannot be empty.", "Password cannot be null."]
        );
        assert!(db.get_user_by_email("").await.unwrap().is_none());
    }
}
