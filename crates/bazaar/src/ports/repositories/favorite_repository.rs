//! Favorite Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Favorite, FavoriteDetails, NewFavorite};

/// Repository interface for Favorite entities
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, DomainError>;

    /// A favorite joined with its listing, owner and category
    async fn find_details(&self, id: i64) -> Result<Option<FavoriteDetails>, DomainError>;

    /// Favorites of a user, optionally for a single listing
    async fn find_by_user(
        &self,
        user_id: i64,
        item_listing_id: Option<i64>,
    ) -> Result<Vec<FavoriteDetails>, DomainError>;

    async fn insert(&self, favorite: &NewFavorite) -> Result<Favorite, DomainError>;

    async fn update(&self, favorite: &Favorite) -> Result<Favorite, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
