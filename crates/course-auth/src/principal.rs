//! Authenticated principal

use course_db::User;

/// The user a request was authenticated as
///
/// Produced fresh for every request and handed explicitly to whatever
/// needs to know who is calling. Never persisted.
#[derive(Debug, Clone)]
pub struct Principal {
    user: User,
}

impl Principal {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
