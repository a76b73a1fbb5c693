//! ItemListing Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ItemListing, ListingDetails, NewListing};

/// Repository interface for ItemListing entities
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemListing>, DomainError>;

    /// A listing joined with its owner and category
    async fn find_details(&self, id: i64) -> Result<Option<ListingDetails>, DomainError>;

    /// All listings, optionally restricted to one category
    async fn find_all(&self, category_id: Option<i64>)
        -> Result<Vec<ListingDetails>, DomainError>;

    /// Listings owned by the user, optionally restricted to one category
    async fn find_by_owner(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<ListingDetails>, DomainError>;

    async fn insert(&self, listing: &NewListing) -> Result<ItemListing, DomainError>;

    /// Persist the mutable fields of an existing listing
    async fn update(&self, listing: &ItemListing) -> Result<ItemListing, DomainError>;

    /// Delete a listing, cascading to its favorites
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
