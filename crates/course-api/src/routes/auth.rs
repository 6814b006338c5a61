//! Authentication extractor

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use course_auth::Principal;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for an authenticated principal (required)
///
/// Every credential failure rejects with the same 401 body.
pub struct RequireAuth(pub Principal);

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A header that is not visible ASCII is treated like a missing one
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let principal = app_state.authenticator.authenticate(auth_header).await?;

        debug!("Authenticated user: {}", principal.id());
        Ok(RequireAuth(principal))
    }
}
