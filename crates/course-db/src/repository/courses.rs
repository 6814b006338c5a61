//! Course operations

use chrono::Utc;
use sqlx::Row;

use crate::error::DbError;
use crate::models::{Course, CourseChanges, CourseWithOwner, NewCourse};
use crate::repository::Database;
use crate::validation::Validate;

/// Course columns joined with the owner's public name; never the owner's
/// email address or password.
const COURSE_WITH_OWNER_SELECT: &str = r#"
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
           c.user_id, c.created_at, c.updated_at,
           u.first_name AS owner_first_name, u.last_name AS owner_last_name
    FROM courses c
    INNER JOIN users u ON u.id = c.user_id
"#;

impl Database {
    // ==================== Course Operations ====================

    /// Insert a new course
    pub async fn insert_course(&self, course: NewCourse) -> Result<Course, DbError> {
        course.validate()?;

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(course.title.as_deref())
        .bind(course.description.as_deref())
        .bind(course.estimated_time.as_deref())
        .bind(course.materials_needed.as_deref())
        .bind(course.user_id)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = result.get("id");

        Ok(Course {
            id,
            title: course.title.unwrap_or_default(),
            description: course.description.unwrap_or_default(),
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a course by ID
    pub async fn get_course(&self, id: i64) -> Result<Option<Course>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, title, description, estimated_time, materials_needed, user_id, created_at, updated_at
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| Course::try_from(&row).map_err(DbError::from)).transpose()
    }

    /// Get a course by ID together with its owner's name
    pub async fn get_course_with_owner(&self, id: i64) -> Result<Option<CourseWithOwner>, DbError> {
        let sql = format!("{} WHERE c.id = ?", COURSE_WITH_OWNER_SELECT);
        let result = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        result
            .map(|row| CourseWithOwner::try_from(&row).map_err(DbError::from))
            .transpose()
    }

    /// List all courses with their owners' names
    pub async fn list_courses_with_owner(&self) -> Result<Vec<CourseWithOwner>, DbError> {
        let sql = format!("{} ORDER BY c.id", COURSE_WITH_OWNER_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| CourseWithOwner::try_from(row).map_err(DbError::from))
            .collect()
    }

    /// Update a course in a single statement
    ///
    /// Returns false if the course no longer exists.
    pub async fn update_course(&self, id: i64, changes: CourseChanges) -> Result<bool, DbError> {
        changes.validate()?;

        let now = Utc::now();

        // Build dynamic update query
        let mut updates = vec![
            "updated_at = ?",
            "title = ?",
            "description = ?",
            "user_id = ?",
        ];
        if changes.estimated_time.is_some() {
            updates.push("estimated_time = ?");
        }
        if changes.materials_needed.is_some() {
            updates.push("materials_needed = ?");
        }

        let sql = format!("UPDATE courses SET {} WHERE id = ?", updates.join(", "));
        let mut query = sqlx::query(&sql)
            .bind(now.to_rfc3339())
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.user_id);

        // Bind optional fields in the same order as updates
        if let Some(ref v) = changes.estimated_time {
            query = query.bind(v.clone());
        }
        if let Some(ref v) = changes.materials_needed {
            query = query.bind(v.clone());
        }

        let result = query.bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a course
    pub async fn delete_course(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;

    async fn seed_owner(db: &Database) -> i64 {
        db.insert_user(NewUser {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            email_address: Some("grace@example.com".to_string()),
            password: Some("$argon2id$placeholder".to_string()),
        })
        .await
        .unwrap()
        .id
    }

    fn new_course(user_id: i64) -> NewCourse {
        NewCourse {
            title: Some("Build a Basic Bookcase".to_string()),
            description: Some("High-end furniture projects are great to dream about.".to_string()),
            estimated_time: Some("12 hours".to_string()),
            materials_needed: None,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_course_lifecycle() {
        let db = Database::in_memory().await.unwrap();
        let owner = seed_owner(&db).await;

        let course = db.insert_course(new_course(owner)).await.unwrap();
        assert_eq!(course.user_id, owner);

        let fetched = db.get_course(course.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Build a Basic Bookcase");
        assert_eq!(fetched.estimated_time.as_deref(), Some("12 hours"));

        let updated = db
            .update_course(
                course.id,
                CourseChanges {
                    title: "Build a Better Bookcase".to_string(),
                    description: "Revised".to_string(),
                    estimated_time: Some(None),
                    materials_needed: Some(Some("Wood glue".to_string())),
                    user_id: owner,
                },
            )
            .await
            .unwrap();
        assert!(updated);

        let fetched = db.get_course(course.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Build a Better Bookcase");
        assert_eq!(fetched.estimated_time, None);
        assert_eq!(fetched.materials_needed.as_deref(), Some("Wood glue"));

        assert!(db.delete_course(course.id).await.unwrap());
        assert!(db.get_course(course.id).await.unwrap().is_none());
        assert!(!db.delete_course(course.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_leaves_absent_optional_fields() {
        let db = Database::in_memory().await.unwrap();
        let owner = seed_owner(&db).await;
        let course = db.insert_course(new_course(owner)).await.unwrap();

        db.update_course(
            course.id,
            CourseChanges {
                title: "T".to_string(),
                description: "D".to_string(),
                estimated_time: None,
                materials_needed: None,
                user_id: owner,
            },
        )
        .await
        .unwrap();

        let fetched = db.get_course(course.id).await.unwrap().unwrap();
        assert_eq!(fetched.estimated_time.as_deref(), Some("12 hours"));
    }

    #[tokio::test]
    async fn test_list_courses_includes_owner_name() {
        let db = Database::in_memory().await.unwrap();
        let owner = seed_owner(&db).await;
        db.insert_course(new_course(owner)).await.unwrap();
        db.insert_course(new_course(owner)).await.unwrap();

        let courses = db.list_courses_with_owner().await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].owner.id, owner);
        assert_eq!(courses[0].owner.first_name, "Grace");
        assert_eq!(courses[0].owner.last_name, "Hopper");

        let single = db.get_course_with_owner(courses[1].course.id).await.unwrap().unwrap();
        assert_eq!(single.course.id, courses[1].course.id);
        assert!(db.get_course_with_owner(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_course_validation() {
        let db = Database::in_memory().await.unwrap();
        let owner = seed_owner(&db).await;

        let err = db
            .insert_course(NewCourse {
                title: None,
                description: Some("".to_string()),
                user_id: owner,
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.validation_messages().unwrap(),
            &["Title cannot be null.", "Description cannot be empty."]
        );
        assert!(db.list_courses_with_owner().await.unwrap().is_empty());
    }
}
