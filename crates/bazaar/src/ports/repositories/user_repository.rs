//! User Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewUser, User};

/// Repository interface for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a User by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a User by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Distinct users owning at least one listing in the category
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<User>, DomainError>;

    /// Insert a User. Duplicate username or email fails with `Conflict`.
    async fn insert(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Delete a User, cascading to their listings and favorites
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
