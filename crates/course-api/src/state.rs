//! Application state

use course_auth::{AuthFailure, Authenticator, PasswordHasher};
use course_core::{CourseService, UserService};
use course_db::Database;
use std::sync::Arc;

/// Prometheus handle used to render the `/metrics` endpoint
pub type MetricsHandle = metrics_exporter_prometheus::PrometheusHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub authenticator: Arc<Authenticator<Database>>,
    pub users: Arc<UserService<Database>>,
    pub courses: CourseService,
}

impl AppState {
    pub fn new(db: Database, hasher: PasswordHasher) -> Result<Self, AuthFailure> {
        let authenticator = Arc::new(Authenticator::new(db.clone(), hasher.clone())?);
        let users = Arc::new(UserService::new(db.clone(), hasher));
        let courses = CourseService::new(db.clone());

        Ok(Self {
            db,
            authenticator,
            users,
            courses,
        })
    }
}
