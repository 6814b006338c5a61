//! Database models

use crate::utils::parse_datetime_or_now;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;

/// User model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Login identifier
    pub email_address: String,
    /// Argon2 PHC string (never the plaintext)
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a course owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseOwner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Course joined with the name of the user who owns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseWithOwner {
    pub course: Course,
    pub owner: CourseOwner,
}

/// New user (for insertion)
///
/// Required fields are optional here so that a missing value can be
/// reported as a constraint violation instead of a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    /// Already hashed
    pub password: Option<String>,
}

/// New course (for insertion)
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
}

/// Update course
///
/// `None` leaves an optional column untouched, `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct CourseChanges {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
    pub user_id: i64,
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for User {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email_address: row.try_get("email_address")?,
            password: row.try_get("password")?,
            created_at: parse_datetime_or_now(&row.try_get::<String, _>("created_at")?),
            updated_at: parse_datetime_or_now(&row.try_get::<String, _>("updated_at")?),
        })
    }
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for Course {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        Ok(Course {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            estimated_time: row.try_get("estimated_time")?,
            materials_needed: row.try_get("materials_needed")?,
            user_id: row.try_get("user_id")?,
            created_at: parse_datetime_or_now(&row.try_get::<String, _>("created_at")?),
            updated_at: parse_datetime_or_now(&row.try_get::<String, _>("updated_at")?),
        })
    }
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for CourseWithOwner {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        let course = Course::try_from(row)?;
        Ok(CourseWithOwner {
            owner: CourseOwner {
                id: course.user_id,
                first_name: row.try_get("owner_first_name")?,
                last_name: row.try_get("owner_last_name")?,
            },
            course,
        })
    }
}
