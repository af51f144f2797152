//! User repository for database operations
//!
//! The `users.username` UNIQUE constraint is the authoritative guard
//! against duplicate registrations: callers may pre-check existence for a
//! friendlier error, but a concurrent insert race is decided here by the
//! database, surfacing as a unique-violation error.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a partial user update
///
/// `None` keeps the stored value (COALESCE in the query).
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        password_hash: &str,
        email: &str,
        date_of_birth: NaiveDate,
    ) -> sqlx::Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, password_hash, email, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, email, date_of_birth, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(date_of_birth)
        .fetch_one(pool)
        .await
    }

    /// Find user by username (exact, case-sensitive match)
    pub async fn find_by_username(pool: &PgPool, username: &str) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, email, date_of_birth, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// List all users
    pub async fn list_all(pool: &PgPool) -> sqlx::Result<Vec<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, email, date_of_birth, created_at, updated_at
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Check if a username is taken
    pub async fn username_exists(pool: &PgPool, username: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await
    }

    /// Partially update a user; returns None if the username does not exist
    pub async fn update(
        pool: &PgPool,
        username: &str,
        updates: UpdateUser,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                username = COALESCE($2, username),
                password_hash = COALESCE($3, password_hash),
                email = COALESCE($4, email),
                date_of_birth = COALESCE($5, date_of_birth),
                updated_at = NOW()
            WHERE username = $1
            RETURNING id, username, password_hash, email, date_of_birth, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(updates.username)
        .bind(updates.password_hash)
        .bind(updates.email)
        .bind(updates.date_of_birth)
        .fetch_optional(pool)
        .await
    }

    /// Hard-delete a user; favorites cascade. Returns false if not found.
    pub async fn delete(pool: &PgPool, username: &str) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE username = $1
            "#,
        )
        .bind(username)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Favorite movie ids for a user
    ///
    /// Weak references: ids may point at movies that no longer exist.
    pub async fn favorites(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT movie_id FROM user_favorites
            WHERE user_id = $1
            ORDER BY added_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Add a movie to the user's favorites (set semantics, idempotent)
    pub async fn add_favorite(pool: &PgPool, user_id: Uuid, movie_id: Uuid) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_favorites (user_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a movie from the user's favorites
    pub async fn remove_favorite(pool: &PgPool, user_id: Uuid, movie_id: Uuid) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM user_favorites
            WHERE user_id = $1 AND movie_id = $2
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}
