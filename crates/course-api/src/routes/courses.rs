//! Course routes

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode, header::LOCATION},
    routing::get,
};
use course_core::courses::COURSE_NOT_FOUND;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::RequireAuth;
use super::types::{CourseRequest, CourseResponse};

/// A course id that is not an integer cannot name a course
fn course_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound(COURSE_NOT_FOUND.to_string()))
}

// ==================== Public Reads ====================

/// GET /api/courses
async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = state.courses.list().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /api/courses/{id}
async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseResponse>, ApiError> {
    let id = course_id(path)?;
    let course = state.courses.get(id).await?;
    Ok(Json(CourseResponse::from(course)))
}

// ==================== Owner Mutations ====================

/// POST /api/courses
async fn create_course(
    RequireAuth(principal): RequireAuth,
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let Json(request) = payload?;

    let course = state.courses.create(&principal, request.into()).await?;

    let mut headers = HeaderMap::new();
    let location = HeaderValue::from_str(&format!("/api/courses/{}", course.id))
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers))
}

/// PUT /api/courses/{id}
async fn update_course(
    RequireAuth(principal): RequireAuth,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = course_id(path)?;

    // An unreadable body is treated as an empty one so that a missing course
    // or a foreign owner is still reported first.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable update body for course {}: {}", id, rejection);
            CourseRequest::default()
        }
    };

    state.courses.update(&principal, id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/courses/{id}
async fn delete_course(
    RequireAuth(principal): RequireAuth,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = course_id(path)?;
    state.courses.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route(
            "/api/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
