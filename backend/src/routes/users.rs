//! User registration, account and favorites routes
//!
//! Registration is public; every other route here requires a valid bearer
//! token. The gate exposes the token's subject and stops there: it does
//! not match the subject against the path username.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use movie_catalog_shared::types::{RegisterRequest, UpdateUserRequest, UserResponse};
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register).get(list_users))
        .route(
            "/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/:username/movies/:movie_id",
            patch(add_favorite).delete(remove_favorite),
        )
}

/// Register a new user
///
/// POST /users
///
/// The response carries the sanitized user; the password is never echoed
/// in any form.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::register(state.db(), &req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
///
/// GET /users
async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}

/// Get one user by username
///
/// GET /users/:username
async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get_user(state.db(), &username).await?;
    Ok(Json(user))
}

/// Update a user's info
///
/// PUT /users/:username
async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update_user(state.db(), &username, req).await?;
    Ok(Json(user))
}

/// Delete a user account
///
/// DELETE /users/:username
async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<StatusCode> {
    UserService::delete_user(state.db(), &username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a movie to a user's favorites
///
/// PATCH /users/:username/movies/:movie_id
async fn add_favorite(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((username, movie_id)): Path<(String, Uuid)>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::add_favorite(state.db(), &username, movie_id).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Remove a movie from a user's favorites
///
/// DELETE /users/:username/movies/:movie_id
async fn remove_favorite(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((username, movie_id)): Path<(String, Uuid)>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::remove_favorite(state.db(), &username, movie_id).await?;
    Ok(Json(user))
}
