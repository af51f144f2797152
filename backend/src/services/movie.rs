//! Movie catalog read services

use crate::error::ApiError;
use crate::repositories::{MovieRecord, MovieRepository};
use movie_catalog_shared::types::{DirectorResponse, GenreResponse, MovieResponse};
use sqlx::PgPool;

/// Movie service for catalog reads
pub struct MovieService;

impl MovieService {
    /// List all movies
    pub async fn list_movies(pool: &PgPool) -> Result<Vec<MovieResponse>, ApiError> {
        let records = MovieRepository::find_all(pool).await?;
        Ok(records.into_iter().map(to_response).collect())
    }

    /// Get one movie by exact title
    pub async fn get_by_title(pool: &PgPool, title: &str) -> Result<MovieResponse, ApiError> {
        let record = MovieRepository::find_by_title(pool, title)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Movie {} was not found", title)))?;
        Ok(to_response(record))
    }

    /// Get genre info by genre name
    pub async fn get_genre(pool: &PgPool, name: &str) -> Result<GenreResponse, ApiError> {
        let record = MovieRepository::find_genre_by_name(pool, name)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Genre {} was not found", name)))?;
        Ok(GenreResponse {
            name: record.genre_name,
            description: record.genre_description,
        })
    }

    /// Get director info by name
    pub async fn get_director(pool: &PgPool, name: &str) -> Result<DirectorResponse, ApiError> {
        let record = MovieRepository::find_director_by_name(pool, name)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Director {} was not found", name)))?;
        Ok(DirectorResponse {
            name: record.director_name,
            bio: record.director_bio,
            born: record.director_born,
            died: record.director_died,
        })
    }
}

fn to_response(record: MovieRecord) -> MovieResponse {
    MovieResponse {
        id: record.id.to_string(),
        title: record.title,
        description: record.description,
        genre: GenreResponse {
            name: record.genre_name,
            description: record.genre_description,
        },
        director: DirectorResponse {
            name: record.director_name,
            bio: record.director_bio,
            born: record.director_born,
            died: record.director_died,
        },
        image_path: record.image_path,
        featured: record.featured,
    }
}
