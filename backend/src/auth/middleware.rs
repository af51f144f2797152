//! Access gate for protected routes
//!
//! The `AuthUser` extractor runs once per request to a protected route,
//! before the handler's business logic. It validates the bearer token and
//! exposes the subject as the authenticated principal. The identity is NOT
//! re-fetched from the store: a token for an account deleted or renamed
//! after issuance stays valid until its natural expiry.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::AuthError;

/// Authenticated principal extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        // Require the Bearer scheme
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        // Verify signature and expiry using the pre-computed keys
        let claims = app_state.tokens().verify(token)?;

        Ok(AuthUser {
            username: claims.sub,
        })
    }
}
