//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod password;
pub mod sqlite;

// Re-exports
pub use password::Argon2PasswordHasher;
pub use sqlite::{
    SqliteCategoryRepository, SqliteFavoriteRepository, SqliteListingRepository,
    SqliteUserRepository,
};
