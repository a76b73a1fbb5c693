//! SQLite Repository Implementations
//!
//! Relational rules (uniqueness, cascade delete, set-null) are declared in
//! the migrations and enforced by SQLite. Foreign key enforcement is off by
//! default in SQLite, so every pooled connection turns it on.

mod category_repository;
mod favorite_repository;
mod listing_repository;
mod user_repository;

pub use category_repository::SqliteCategoryRepository;
pub use favorite_repository::SqliteFavoriteRepository;
pub use listing_repository::SqliteListingRepository;
pub use user_repository::SqliteUserRepository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use bazaar::DomainError;

/// Open a connection pool with foreign keys enforced
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Translate a storage failure into a domain error.
///
/// Unique violations become `Conflict` with the given message, foreign key
/// violations mean a referenced row is gone.
pub(crate) fn map_db_error(e: sqlx::Error, conflict: &str) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() || db.message().contains("UNIQUE constraint failed") {
            return DomainError::Conflict(conflict.to_string());
        }
    }
    map_reference_error(e)
}

/// For writes to tables without unique constraints: only a foreign key
/// violation is a caller error.
pub(crate) fn map_reference_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() || db.message().contains("FOREIGN KEY constraint failed")
        {
            return DomainError::not_found_str("Referenced record", "unknown");
        }
    }
    repository_error(e)
}

pub(crate) fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}
