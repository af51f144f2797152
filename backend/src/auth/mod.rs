//! Authentication module
//!
//! Provides stateless JWT authentication with argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::AuthUser;
pub use password::PasswordService;

use thiserror::Error;

/// Authentication failure kinds
///
/// Unknown-user and wrong-password are collapsed into `InvalidCredentials`
/// before anything leaves the service layer, so the two cases cannot be
/// told apart from the outside. The token kinds are distinguished here for
/// logging but rendered identically to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing authorization token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
}
