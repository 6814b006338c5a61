//! Course service with ownership-enforced mutations

use course_auth::{Principal, authorize};
use course_db::{Course, CourseChanges, CourseWithOwner, Database, NewCourse};
use tracing::{debug, info, warn};

use crate::error::CoreError;

/// Message returned when an update omits a required field
pub const MISSING_UPDATE_FIELDS: &str = "Please provide title and description";

/// Message returned for an unknown course id
pub const COURSE_NOT_FOUND: &str = "This course does not exist";

/// Course fields a client may submit
///
/// There is no owner field: the owner always comes from the
/// authenticated principal. For the optional fields, `None` means "not
/// submitted" and `Some(None)` means "explicitly cleared".
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

/// Course operations
#[derive(Clone)]
pub struct CourseService {
    db: Database,
}

impl CourseService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // ==================== Public Reads ====================

    /// List every course with its owner's name
    pub async fn list(&self) -> Result<Vec<CourseWithOwner>, CoreError> {
        Ok(self.db.list_courses_with_owner().await?)
    }

    /// Get a single course with its owner's name
    pub async fn get(&self, id: i64) -> Result<CourseWithOwner, CoreError> {
        self.db
            .get_course_with_owner(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(COURSE_NOT_FOUND.to_string()))
    }

    // ==================== Mutations ====================

    /// Create a course owned by the principal
    pub async fn create(&self, principal: &Principal, input: CourseInput) -> Result<Course, CoreError> {
        let course = self
            .db
            .insert_course(NewCourse {
                title: input.title,
                description: input.description,
                estimated_time: input.estimated_time.flatten(),
                materials_needed: input.materials_needed.flatten(),
                user_id: principal.id(),
            })
            .await?;

        info!("User {} created course {}", principal.id(), course.id);
        metrics::counter!("course_api_course_mutations_total", "operation" => "create")
            .increment(1);
        Ok(course)
    }

    /// Update a course the principal owns
    ///
    /// Existence is checked before ownership, and ownership before the
    /// payload. The owner is rewritten to the principal on every update.
    pub async fn update(
        &self,
        principal: &Principal,
        id: i64,
        input: CourseInput,
    ) -> Result<(), CoreError> {
        let course = self.owned_course(principal, id).await?;

        let (Some(title), Some(description)) = (
            input.title.filter(|t| !t.is_empty()),
            input.description.filter(|d| !d.is_empty()),
        ) else {
            debug!("Rejected update of course {}: missing title or description", id);
            return Err(CoreError::BadRequest(MISSING_UPDATE_FIELDS.to_string()));
        };

        let updated = self
            .db
            .update_course(
                course.id,
                CourseChanges {
                    title,
                    description,
                    estimated_time: input.estimated_time,
                    materials_needed: input.materials_needed,
                    user_id: principal.id(),
                },
            )
            .await?;

        // Deleted by another request after the ownership check
        if !updated {
            return Err(CoreError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        info!("User {} updated course {}", principal.id(), id);
        metrics::counter!("course_api_course_mutations_total", "operation" => "update")
            .increment(1);
        Ok(())
    }

    /// Delete a course the principal owns
    pub async fn delete(&self, principal: &Principal, id: i64) -> Result<(), CoreError> {
        let course = self.owned_course(principal, id).await?;

        if !self.db.delete_course(course.id).await? {
            return Err(CoreError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        info!("User {} deleted course {}", principal.id(), id);
        metrics::counter!("course_api_course_mutations_total", "operation" => "delete")
            .increment(1);
        Ok(())
    }

    /// Load a course and confirm the principal owns it
    async fn owned_course(&self, principal: &Principal, id: i64) -> Result<Course, CoreError> {
        let course = self
            .db
            .get_course(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(COURSE_NOT_FOUND.to_string()))?;

        if !authorize(principal, course.user_id).is_allowed() {
            warn!(
                "User {} denied access to course {} owned by user {}",
                principal.id(),
                id,
                course.user_id
            );
            return Err(CoreError::Forbidden);
        }

        Ok(course)
    }
}
