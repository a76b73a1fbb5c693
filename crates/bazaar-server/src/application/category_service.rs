//! Category Application Service (Use Case)
//!
//! Category management and the derived category/listing/user views.
//! Views are recomputed from the store on every call.

use std::sync::Arc;

use bazaar::{
    Category, CategoryListings, CategoryRepository, DomainError, ListingRepository, NewCategory,
    User, UserRepository,
};

/// Application service for Category operations
pub struct CategoryService<C: CategoryRepository, L: ListingRepository, U: UserRepository> {
    categories: Arc<C>,
    listings: Arc<L>,
    users: Arc<U>,
}

impl<C: CategoryRepository, L: ListingRepository, U: UserRepository> CategoryService<C, L, U> {
    pub fn new(categories: Arc<C>, listings: Arc<L>, users: Arc<U>) -> Self {
        Self {
            categories,
            listings,
            users,
        }
    }

    /// Categories reachable through the user's listings, each paired with
    /// only that user's listings in it
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<CategoryListings>, DomainError> {
        let categories = self.categories.find_by_owner(user_id).await?;
        let listings = self.listings.find_by_owner(user_id, None).await?;

        Ok(CategoryListings::group(categories, listings))
    }

    /// All categories with every listing in them
    pub async fn list_all(&self) -> Result<Vec<CategoryListings>, DomainError> {
        let categories = self.categories.find_all().await?;
        let listings = self.listings.find_all(None).await?;

        Ok(CategoryListings::group(categories, listings))
    }

    /// Create a new Category
    pub async fn create(&self, name: Option<String>) -> Result<Category, DomainError> {
        let new = NewCategory::parse(name)?;

        if self.categories.find_by_name(&new.name).await?.is_some() {
            return Err(DomainError::Conflict("Category already exists".to_string()));
        }

        let category = self.categories.insert(&new).await?;
        tracing::info!("Created Category: {} ({})", category.name, category.id);

        Ok(category)
    }

    /// A category with the listings `user_id` owns in it.
    ///
    /// This is a read: the category need not have any listing by the user.
    pub async fn get_with_user_listings(
        &self,
        category_id: i64,
        user_id: i64,
    ) -> Result<CategoryListings, DomainError> {
        let category = self.get(category_id).await?;
        let listings = self
            .listings
            .find_by_owner(user_id, Some(category_id))
            .await?;

        Ok(CategoryListings::new(category, listings))
    }

    /// Distinct owners of listings in the category
    pub async fn list_users(&self, category_id: i64) -> Result<Vec<User>, DomainError> {
        self.get(category_id).await?;
        self.users.find_by_category(category_id).await
    }

    /// Delete a Category; its listings stay, uncategorized
    pub async fn delete(&self, category_id: i64) -> Result<(), DomainError> {
        if !self.categories.delete(category_id).await? {
            return Err(DomainError::not_found("Category", category_id));
        }

        tracing::info!("Deleted Category: {}", category_id);
        Ok(())
    }

    async fn get(&self, category_id: i64) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", category_id))
    }
}
