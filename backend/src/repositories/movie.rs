//! Movie repository for database operations
//!
//! Read-only catalog access. Genre and director lookups return projections
//! of the matching movie row, not full records.

use sqlx::PgPool;
use uuid::Uuid;

/// Movie record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre_name: String,
    pub genre_description: Option<String>,
    pub director_name: String,
    pub director_bio: Option<String>,
    pub director_born: Option<String>,
    pub director_died: Option<String>,
    pub image_path: String,
    pub featured: bool,
}

/// Genre projection
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GenreRecord {
    pub genre_name: String,
    pub genre_description: Option<String>,
}

/// Director projection
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DirectorRecord {
    pub director_name: String,
    pub director_bio: Option<String>,
    pub director_born: Option<String>,
    pub director_died: Option<String>,
}

/// Movie repository for database operations
pub struct MovieRepository;

impl MovieRepository {
    /// List the whole catalog
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<MovieRecord>> {
        sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, genre_name, genre_description,
                   director_name, director_bio, director_born, director_died,
                   image_path, featured
            FROM movies
            ORDER BY title
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Find one movie by exact title
    pub async fn find_by_title(pool: &PgPool, title: &str) -> sqlx::Result<Option<MovieRecord>> {
        sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, genre_name, genre_description,
                   director_name, director_bio, director_born, director_died,
                   image_path, featured
            FROM movies
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(pool)
        .await
    }

    /// Genre info from the first movie carrying the given genre name
    pub async fn find_genre_by_name(pool: &PgPool, name: &str) -> sqlx::Result<Option<GenreRecord>> {
        sqlx::query_as::<_, GenreRecord>(
            r#"
            SELECT genre_name, genre_description
            FROM movies
            WHERE genre_name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Director info from the first movie carrying the given director name
    pub async fn find_director_by_name(
        pool: &PgPool,
        name: &str,
    ) -> sqlx::Result<Option<DirectorRecord>> {
        sqlx::query_as::<_, DirectorRecord>(
            r#"
            SELECT director_name, director_bio, director_born, director_died
            FROM movies
            WHERE director_name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}
