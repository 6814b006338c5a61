//! Request/Response DTOs

use course_core::{CourseInput, RegistrationInput};
use course_db::{CourseOwner, CourseWithOwner, User};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field that distinguishes "absent" from "null"
///
/// Paired with `#[serde(default)]`: an absent field stays `None`, an explicit
/// `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ==================== User Types ====================

/// Registration request
///
/// Only these fields are read; anything else in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

impl From<RegisterUserRequest> for RegistrationInput {
    fn from(request: RegisterUserRequest) -> Self {
        RegistrationInput {
            first_name: request.first_name,
            last_name: request.last_name,
            email_address: request.email_address,
            password: request.password,
        }
    }
}

/// User response (without password or timestamps)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

// ==================== Course Types ====================

/// Create/update course request
///
/// There is no owner field; a `userId` in the body is dropped here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
}

impl From<CourseRequest> for CourseInput {
    fn from(request: CourseRequest) -> Self {
        CourseInput {
            title: request.title,
            description: request.description,
            estimated_time: request.estimated_time,
            materials_needed: request.materials_needed,
        }
    }
}

/// Course response with its owner's public name
///
/// Timestamps are not part of the public shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    #[serde(rename = "User")]
    pub owner: CourseOwner,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(CourseWithOwner { course, owner }: CourseWithOwner) -> Self {
        CourseResponse {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_request_distinguishes_null_from_absent() {
        let request: CourseRequest =
            serde_json::from_str(r#"{"title":"T","estimatedTime":null}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("T"));
        assert_eq!(request.estimated_time, Some(None));
        assert_eq!(request.materials_needed, None);
    }

    #[test]
    fn test_course_request_accepts_and_drops_owner_fields() {
        let request: CourseRequest = serde_json::from_str(
            r#"{"title":"T","description":"D","userId":99,"User":{"id":99}}"#,
        )
        .unwrap();
        let input = CourseInput::from(request);
        assert_eq!(input.title.as_deref(), Some("T"));
        assert_eq!(input.description.as_deref(), Some("D"));
    }

    #[test]
    fn test_course_response_shape() {
        let now = chrono::Utc::now();
        let response = CourseResponse::from(CourseWithOwner {
            course: course_db::Course {
                id: 3,
                title: "T".to_string(),
                description: "D".to_string(),
                estimated_time: None,
                materials_needed: Some("Wood".to_string()),
                user_id: 1,
                created_at: now,
                updated_at: now,
            },
            owner: CourseOwner {
                id: 1,
                first_name: "Joe".to_string(),
                last_name: "Smith".to_string(),
            },
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["materialsNeeded"], "Wood");
        assert_eq!(json["User"]["firstName"], "Joe");
        assert!(json.get("createdAt").is_none());
        assert!(json.get("updatedAt").is_none());
        assert!(json["User"].get("createdAt").is_none());
    }

    #[test]
    fn test_user_response_omits_password() {
        let response = UserResponse {
            id: 1,
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["emailAddress"], "joe@smith.com");
        assert!(json.get("password").is_none());
    }
}
