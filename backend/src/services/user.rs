//! User service for registration and account management
//!
//! Registration checks username availability before inserting, but the
//! store's UNIQUE constraint is the authoritative guard: two concurrent
//! registrations for the same name race past the pre-check and the
//! database decides the winner, the loser mapping to the same duplicate
//! error the pre-check produces.

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{UpdateUser, UserRecord, UserRepository};
use movie_catalog_shared::types::{RegisterRequest, UpdateUserRequest, UserResponse};
use movie_catalog_shared::validation::{
    validate_date_of_birth, validate_password, validate_username,
};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Password hashing is offloaded to the blocking thread pool.
    pub async fn register(pool: &PgPool, req: &RegisterRequest) -> Result<UserResponse, ApiError> {
        validate_username(&req.username).map_err(ApiError::Validation)?;
        validate_password(&req.password).map_err(ApiError::Validation)?;
        if !req.email.validate_email() {
            return Err(ApiError::Validation(
                "The email does not appear to be valid".to_string(),
            ));
        }
        validate_date_of_birth(req.date_of_birth).map_err(ApiError::Validation)?;

        // Fast path for a friendly error; the UNIQUE constraint below is
        // what actually guarantees uniqueness under concurrency
        if UserRepository::username_exists(pool, &req.username).await? {
            return Err(ApiError::DuplicateUsername(req.username.clone()));
        }

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = match UserRepository::create(
            pool,
            &req.username,
            &password_hash,
            &req.email,
            req.date_of_birth,
        )
        .await
        {
            Ok(user) => user,
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(ApiError::DuplicateUsername(req.username.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        // A fresh account has no favorites yet
        Ok(sanitize(user, Vec::new()))
    }

    /// Get one user by username
    pub async fn get_user(pool: &PgPool, username: &str) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} was not found", username)))?;

        Self::to_response(pool, user).await
    }

    /// List all users
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserResponse>, ApiError> {
        let records = UserRepository::list_all(pool).await?;

        let mut users = Vec::with_capacity(records.len());
        for record in records {
            users.push(Self::to_response(pool, record).await?);
        }
        Ok(users)
    }

    /// Partially update a user
    ///
    /// An omitted or empty password keeps the stored hash; anything else is
    /// re-hashed before it reaches the store. One linear awaited pipeline:
    /// validate, hash if needed, update, map the result.
    pub async fn update_user(
        pool: &PgPool,
        username: &str,
        req: UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        if let Some(new_username) = req.username.as_deref() {
            validate_username(new_username).map_err(ApiError::Validation)?;
        }
        if let Some(email) = req.email.as_deref() {
            if !email.validate_email() {
                return Err(ApiError::Validation(
                    "The email does not appear to be valid".to_string(),
                ));
            }
        }
        if let Some(dob) = req.date_of_birth {
            validate_date_of_birth(dob).map_err(ApiError::Validation)?;
        }

        // Renaming to a taken username gets the friendly error up front
        if let Some(new_username) = req.username.as_deref() {
            if new_username != username && UserRepository::username_exists(pool, new_username).await?
            {
                return Err(ApiError::DuplicateUsername(new_username.to_string()));
            }
        }

        let password_hash = match req.password.as_deref() {
            None | Some("") => None,
            Some(password) => Some(
                PasswordService::hash_async(password.to_string())
                    .await
                    .map_err(ApiError::Internal)?,
            ),
        };

        let updates = UpdateUser {
            username: req.username.clone(),
            password_hash,
            email: req.email,
            date_of_birth: req.date_of_birth,
        };

        let updated = match UserRepository::update(pool, username, updates).await {
            Ok(user) => user,
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(ApiError::DuplicateUsername(
                    req.username.unwrap_or_default(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let user =
            updated.ok_or_else(|| ApiError::NotFound(format!("User {} was not found", username)))?;

        Self::to_response(pool, user).await
    }

    /// Hard-delete a user account; favorites are removed with it
    pub async fn delete_user(pool: &PgPool, username: &str) -> Result<(), ApiError> {
        let deleted = UserRepository::delete(pool, username).await?;
        if !deleted {
            return Err(ApiError::NotFound(format!(
                "User {} was not found",
                username
            )));
        }
        Ok(())
    }

    /// Add a movie to the user's favorites
    ///
    /// The movie id is not checked against the catalog: favorites are weak
    /// references and may dangle.
    pub async fn add_favorite(
        pool: &PgPool,
        username: &str,
        movie_id: Uuid,
    ) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} was not found", username)))?;

        UserRepository::add_favorite(pool, user.id, movie_id).await?;

        Self::to_response(pool, user).await
    }

    /// Remove a movie from the user's favorites
    pub async fn remove_favorite(
        pool: &PgPool,
        username: &str,
        movie_id: Uuid,
    ) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} was not found", username)))?;

        UserRepository::remove_favorite(pool, user.id, movie_id).await?;

        Self::to_response(pool, user).await
    }

    /// Build the sanitized wire representation, fetching favorites
    pub async fn to_response(pool: &PgPool, user: UserRecord) -> Result<UserResponse, ApiError> {
        let favorites = UserRepository::favorites(pool, user.id).await?;
        Ok(sanitize(user, favorites))
    }
}

/// Drop the password hash; only this shape reaches serialization
fn sanitize(user: UserRecord, favorites: Vec<Uuid>) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username,
        email: user.email,
        date_of_birth: user.date_of_birth,
        favorites,
    }
}
