//! Favorite Application Service (Use Case)

use std::sync::Arc;

use bazaar::{
    DomainError, FavoriteChanges, FavoriteDetails, FavoriteDraft, FavoriteRepository,
    ListingRepository,
};

use super::require_owned;

/// Application service for Favorite operations
pub struct FavoriteService<F: FavoriteRepository, L: ListingRepository> {
    favorites: Arc<F>,
    listings: Arc<L>,
}

impl<F: FavoriteRepository, L: ListingRepository> FavoriteService<F, L> {
    pub fn new(favorites: Arc<F>, listings: Arc<L>) -> Self {
        Self {
            favorites,
            listings,
        }
    }

    /// The user's favorites, optionally for a single listing
    pub async fn list_for_user(
        &self,
        user_id: i64,
        item_listing_id: Option<i64>,
    ) -> Result<Vec<FavoriteDetails>, DomainError> {
        self.favorites.find_by_user(user_id, item_listing_id).await
    }

    /// Favorite a listing on behalf of the caller
    pub async fn create(
        &self,
        caller_id: i64,
        draft: FavoriteDraft,
    ) -> Result<FavoriteDetails, DomainError> {
        let new = draft.into_new(caller_id)?;

        if self
            .listings
            .find_by_id(new.item_listing_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("ItemListing", new.item_listing_id));
        }

        let favorite = self.favorites.insert(&new).await?;
        tracing::info!(
            "Created Favorite: {} on ItemListing {} for User {}",
            favorite.id,
            favorite.item_listing_id,
            caller_id
        );

        self.details(favorite.id).await
    }

    /// Partially update the caller's favorite
    pub async fn update(
        &self,
        id: i64,
        caller_id: i64,
        changes: FavoriteChanges,
    ) -> Result<FavoriteDetails, DomainError> {
        let current = require_owned(self.favorites.find_by_id(id).await?, id, caller_id)?;
        let favorite = self.favorites.update(&current.apply(changes)).await?;
        self.details(favorite.id).await
    }

    /// Delete the caller's favorite
    pub async fn delete(&self, id: i64, caller_id: i64) -> Result<(), DomainError> {
        require_owned(self.favorites.find_by_id(id).await?, id, caller_id)?;

        if !self.favorites.delete(id).await? {
            return Err(DomainError::not_found("Favorite", id));
        }

        tracing::info!("Deleted Favorite: {}", id);
        Ok(())
    }

    async fn details(&self, id: i64) -> Result<FavoriteDetails, DomainError> {
        self.favorites
            .find_details(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Favorite", id))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::store;
    use bazaar::{DomainError, FavoriteChanges, FavoriteDraft};

    #[tokio::test]
    async fn test_create_binds_caller() {
        let store = store().await;
        let alice = store.user("alice").await;
        let bob = store.user("bob").await;
        let books = store.category("Books").await;
        let listing = store.listing(&alice, books.id, "Go Book").await;

        let created = store
            .favorites
            .create(
                bob.id,
                FavoriteDraft {
                    item_listing_id: Some(listing.id),
                    note: Some("gift idea".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.favorite.user_id, bob.id);
        assert_eq!(created.favorite.item_listing_id, listing.id);
        assert_eq!(created.favorite.note.as_deref(), Some("gift idea"));
        assert_eq!(created.listing.listing.title, "Go Book");
        assert_eq!(created.listing.owner.username, "alice");
    }

    #[tokio::test]
    async fn test_create_errors() {
        let store = store().await;
        let bob = store.user("bob").await;

        let err = store
            .favorites
            .create(bob.id, FavoriteDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = store
            .favorites
            .create(
                bob.id,
                FavoriteDraft {
                    item_listing_id: Some(77),
                    note: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_for_user() {
        let store = store().await;
        let alice = store.user("alice").await;
        let bob = store.user("bob").await;
        let books = store.category("Books").await;
        let first = store.listing(&alice, books.id, "Go Book").await;
        let second = store.listing(&alice, books.id, "C Book").await;

        store.favorite(&bob, &first).await;
        store.favorite(&bob, &second).await;
        store.favorite(&alice, &first).await;

        let bobs = store.favorites.list_for_user(bob.id, None).await.unwrap();
        assert_eq!(bobs.len(), 2);
        assert!(bobs.iter().all(|f| f.favorite.user_id == bob.id));

        let filtered = store
            .favorites
            .list_for_user(bob.id, Some(second.id))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].favorite.item_listing_id, second.id);
        assert_eq!(filtered[0].listing.listing.title, "C Book");
    }

    #[tokio::test]
    async fn test_update_note() {
        let store = store().await;
        let alice = store.user("alice").await;
        let books = store.category("Books").await;
        let listing = store.listing(&alice, books.id, "Go Book").await;
        let favorite = store.favorite(&alice, &listing).await;

        let updated = store
            .favorites
            .update(
                favorite.id,
                alice.id,
                FavoriteChanges {
                    note: Some(Some("for later".to_string())),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.favorite.note.as_deref(), Some("for later"));

        let unchanged = store
            .favorites
            .update(favorite.id, alice.id, FavoriteChanges::default())
            .await
            .unwrap();
        assert_eq!(unchanged.favorite.note.as_deref(), Some("for later"));

        let cleared = store
            .favorites
            .update(favorite.id, alice.id, FavoriteChanges { note: Some(None) })
            .await
            .unwrap();
        assert_eq!(cleared.favorite.note, None);
        assert_eq!(cleared.favorite.item_listing_id, listing.id);
        assert_eq!(cleared.listing.listing.id, listing.id);
    }

    #[tokio::test]
    async fn test_ownership_checks() {
        let store = store().await;
        let alice = store.user("alice").await;
        let bob = store.user("bob").await;
        let books = store.category("Books").await;
        let listing = store.listing(&alice, books.id, "Go Book").await;
        let favorite = store.favorite(&alice, &listing).await;

        let err = store
            .favorites
            .update(999, alice.id, FavoriteChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = store.favorites.delete(999, bob.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = store
            .favorites
            .update(favorite.id, bob.id, FavoriteChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = store.favorites.delete(favorite.id, bob.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        store.favorites.delete(favorite.id, alice.id).await.unwrap();
        assert!(store
            .favorites
            .list_for_user(alice.id, None)
            .await
            .unwrap()
            .is_empty());
    }
}
