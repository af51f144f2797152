//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod movie;
pub mod user;

pub use movie::{DirectorRecord, GenreRecord, MovieRecord, MovieRepository};
pub use user::{UpdateUser, UserRecord, UserRepository};
