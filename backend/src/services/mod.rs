//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod auth;
pub mod movie;
pub mod user;

pub use auth::AuthService;
pub use movie::MovieService;
pub use user::UserService;
