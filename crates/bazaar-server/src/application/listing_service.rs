//! Listing Application Service (Use Case)
//!
//! Listing reads and owner-gated mutations.

use std::sync::Arc;

use bazaar::{
    CategoryRepository, DomainError, ListingDetails, ListingDraft, ListingRepository, NewListing,
};

use super::require_owned;

/// Application service for ItemListing operations
pub struct ListingService<L: ListingRepository, C: CategoryRepository> {
    listings: Arc<L>,
    categories: Arc<C>,
}

impl<L: ListingRepository, C: CategoryRepository> ListingService<L, C> {
    pub fn new(listings: Arc<L>, categories: Arc<C>) -> Self {
        Self {
            listings,
            categories,
        }
    }

    /// All listings, optionally in one category
    pub async fn list(&self, category_id: Option<i64>) -> Result<Vec<ListingDetails>, DomainError> {
        self.listings.find_all(category_id).await
    }

    /// The caller's own listings, optionally in one category
    pub async fn list_for_user(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<ListingDetails>, DomainError> {
        self.listings.find_by_owner(user_id, category_id).await
    }

    /// Get a listing by ID, with its owner and category
    pub async fn get(&self, id: i64) -> Result<ListingDetails, DomainError> {
        self.listings
            .find_details(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ItemListing", id))
    }

    /// Create a listing owned by the caller
    pub async fn create(
        &self,
        caller_id: i64,
        draft: ListingDraft,
    ) -> Result<ListingDetails, DomainError> {
        let fields = draft.validate()?;
        self.ensure_category(fields.category_id).await?;

        let listing = self
            .listings
            .insert(&NewListing::new(caller_id, fields))
            .await?;

        tracing::info!(
            "Created ItemListing: {} ({}) for User {}",
            listing.title,
            listing.id,
            caller_id
        );

        self.get(listing.id).await
    }

    /// Replace every mutable field of the caller's listing
    pub async fn update(
        &self,
        id: i64,
        caller_id: i64,
        draft: ListingDraft,
    ) -> Result<ListingDetails, DomainError> {
        let current = require_owned(self.listings.find_by_id(id).await?, id, caller_id)?;

        let fields = draft.validate()?;
        self.ensure_category(fields.category_id).await?;

        let listing = self.listings.update(&current.replace(fields)).await?;
        self.get(listing.id).await
    }

    /// Delete the caller's listing; the store cascades to its favorites
    pub async fn delete(&self, id: i64, caller_id: i64) -> Result<(), DomainError> {
        require_owned(self.listings.find_by_id(id).await?, id, caller_id)?;

        if !self.listings.delete(id).await? {
            return Err(DomainError::not_found("ItemListing", id));
        }

        tracing::info!("Deleted ItemListing: {}", id);
        Ok(())
    }

    async fn ensure_category(&self, category_id: i64) -> Result<(), DomainError> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Category", category_id)),
        }
    }
}
