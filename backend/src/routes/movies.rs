//! Movie catalog routes
//!
//! All catalog reads require a valid bearer token.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::MovieService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use movie_catalog_shared::types::{DirectorResponse, GenreResponse, MovieResponse};

/// Create movie routes
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies))
        .route("/:title", get(get_movie))
        .route("/genre/:name", get(get_genre))
        .route("/director/:name", get(get_director))
}

/// List all movies
///
/// GET /movies
async fn list_movies(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<MovieResponse>>> {
    let movies = MovieService::list_movies(state.db()).await?;
    Ok(Json(movies))
}

/// Get one movie by exact title
///
/// GET /movies/:title
async fn get_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(title): Path<String>,
) -> ApiResult<Json<MovieResponse>> {
    let movie = MovieService::get_by_title(state.db(), &title).await?;
    Ok(Json(movie))
}

/// Get genre info by genre name
///
/// GET /movies/genre/:name
async fn get_genre(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<Json<GenreResponse>> {
    let genre = MovieService::get_genre(state.db(), &name).await?;
    Ok(Json(genre))
}

/// Get director info by name
///
/// GET /movies/director/:name
async fn get_director(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<Json<DirectorResponse>> {
    let director = MovieService::get_director(state.db(), &name).await?;
    Ok(Json(director))
}

#[cfg(test)]
mod tests {
    // Route tests live in backend/tests/
}
