//! Authentication routes
//!
//! The login endpoint speaks the legacy wire shape: 200 with
//! `{user, token}` on success, 400 with `{message, user: null}` on any
//! credential failure. The failure body never says which field was wrong.

use crate::auth::AuthError;
use crate::error::ApiError;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use movie_catalog_shared::types::{LoginFailure, LoginRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login with username and password
///
/// POST /login
async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match AuthService::login(state.db(), state.tokens(), &req.username, &req.password).await {
        Ok(response) => Json(response).into_response(),
        Err(ApiError::Auth(AuthError::InvalidCredentials)) => (
            StatusCode::BAD_REQUEST,
            Json(LoginFailure {
                message: "Invalid username or password".to_string(),
                user: None,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
