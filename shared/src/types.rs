//! API request and response types
//!
//! Field names follow the wire contract the existing clients speak:
//! user-facing fields are capitalized (`Username`, `Email`, `DOB`) and are
//! mapped onto snake_case struct fields via serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Successful login response: the sanitized user plus a fresh token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Failed login response
///
/// `user` is always null and the message never says which field was wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFailure {
    pub message: String,
    pub user: Option<UserResponse>,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "DOB")]
    pub date_of_birth: NaiveDate,
}

/// Partial user update request
///
/// Omitted fields keep their stored value. An omitted or empty password
/// keeps the stored hash; anything else is re-hashed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "Username")]
    pub username: Option<String>,
    #[serde(rename = "Password")]
    pub password: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "DOB")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Sanitized user representation
///
/// This is the only user shape that goes on the wire. It is constructed
/// without the password hash, so the hash cannot leak by serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "DOB")]
    pub date_of_birth: NaiveDate,
    /// Favorite movie ids. Weak references: a deleted movie may leave a
    /// stale id here.
    #[serde(rename = "Favorites")]
    pub favorites: Vec<Uuid>,
}

/// Genre information embedded in a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Director information embedded in a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bio", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Born", skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(rename = "Died", skip_serializing_if = "Option::is_none")]
    pub died: Option<String>,
}

/// Movie response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Genre")]
    pub genre: GenreResponse,
    #[serde(rename = "Director")]
    pub director: DirectorResponse,
    #[serde(rename = "ImagePath")]
    pub image_path: String,
    #[serde(rename = "Featured")]
    pub featured: bool,
}
