//! Credential verification and login orchestration
//!
//! The verifier is a pure read path: look up the identity, check the
//! submitted password against the stored digest, and hand back the record.
//! Unknown usernames and wrong passwords fail with the same error so the
//! response cannot be used to enumerate identifiers.

use crate::auth::{AuthError, PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use crate::services::UserService;
use movie_catalog_shared::types::LoginResponse;
use sqlx::PgPool;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Verify a username/password pair against the store
    ///
    /// Exact, case-sensitive username match. Password verification runs on
    /// the blocking thread pool.
    pub async fn verify_credentials(
        pool: &PgPool,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Login: verify credentials, then issue a fresh token
    ///
    /// Returns the sanitized user together with the token. No token is
    /// persisted; the server holds no session state.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let user = Self::verify_credentials(pool, username, password).await?;

        let token = tokens.issue(&user.username).map_err(ApiError::Internal)?;
        let user = UserService::to_response(pool, user).await?;

        Ok(LoginResponse { user, token })
    }
}

#[cfg(test)]
mod tests {
    // Credential checks need a database - covered in backend/tests/
}
