//! Category Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Category, NewCategory};

/// Repository interface for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Distinct categories reachable through the user's listings.
    /// Computed on every call.
    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Category>, DomainError>;

    /// Insert a Category. Duplicate name fails with `Conflict`.
    async fn insert(&self, category: &NewCategory) -> Result<Category, DomainError>;

    /// Delete a Category; listings referencing it get a null category
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
