//! Fixtures for store and route tests
//!
//! Every test gets its own in-memory SQLite database with the real
//! migrations applied. The pool holds a single connection because each
//! in-memory connection is a separate database.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use bazaar::{
    Category, DomainError, Favorite, FavoriteDraft, ItemListing, ListingDraft, PasswordHasher,
    User, UserDraft,
};

use crate::adapters::{
    Argon2PasswordHasher, SqliteCategoryRepository, SqliteFavoriteRepository, SqliteListingRepository,
    SqliteUserRepository,
};
use crate::application::{CategoryService, FavoriteService, ListingService, UserService};
use crate::auth::TokenSigner;
use crate::AppState;

pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

/// Application state over a fresh database, with cheap Argon2 parameters
pub async fn app_state() -> AppState {
    let params = argon2::Params::new(argon2::Params::MIN_M_COST, 1, 1, None).unwrap();

    AppState::new(
        memory_pool().await,
        Argon2PasswordHasher::with_params(params),
        TokenSigner::new("test-secret", 3600),
    )
}

/// Reversible stand-in for a real password hash
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        Ok(password_hash == format!("plain:{password}"))
    }
}

/// All four application services over one database
pub struct Store {
    pub users: UserService<SqliteUserRepository, PlainHasher>,
    pub categories:
        CategoryService<SqliteCategoryRepository, SqliteListingRepository, SqliteUserRepository>,
    pub listings: ListingService<SqliteListingRepository, SqliteCategoryRepository>,
    pub favorites: FavoriteService<SqliteFavoriteRepository, SqliteListingRepository>,
}

pub async fn store() -> Store {
    let pool = memory_pool().await;

    let users = Arc::new(SqliteUserRepository::new(pool.clone()));
    let categories = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let listings = Arc::new(SqliteListingRepository::new(pool.clone()));
    let favorites = Arc::new(SqliteFavoriteRepository::new(pool));

    Store {
        users: UserService::new(users.clone(), Arc::new(PlainHasher)),
        categories: CategoryService::new(categories.clone(), listings.clone(), users),
        listings: ListingService::new(listings.clone(), categories),
        favorites: FavoriteService::new(favorites, listings),
    }
}

pub fn draft(username: &str, password: &str) -> UserDraft {
    UserDraft {
        username: Some(username.to_string()),
        email: Some(format!("{username}@example.com")),
        password: Some(password.to_string()),
    }
}

pub fn listing_draft(title: &str, category_id: i64) -> ListingDraft {
    ListingDraft {
        title: Some(title.to_string()),
        description: Some("x".to_string()),
        price: None,
        image_url: None,
        category_id: Some(category_id),
    }
}

impl Store {
    pub async fn user(&self, username: &str) -> User {
        self.users.sign_up(draft(username, "secret1")).await.unwrap()
    }

    pub async fn category(&self, name: &str) -> Category {
        self.categories
            .create(Some(name.to_string()))
            .await
            .unwrap()
    }

    pub async fn listing(&self, owner: &User, category_id: i64, title: &str) -> ItemListing {
        self.listings
            .create(owner.id, listing_draft(title, category_id))
            .await
            .unwrap()
            .listing
    }

    pub async fn favorite(&self, user: &User, listing: &ItemListing) -> Favorite {
        self.favorites
            .create(
                user.id,
                FavoriteDraft {
                    item_listing_id: Some(listing.id),
                    note: None,
                },
            )
            .await
            .unwrap()
            .favorite
    }
}
