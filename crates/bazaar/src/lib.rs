//! Bazaar Domain Library
//!
//! Core domain types and interfaces for the Bazaar marketplace backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and rules
//!   - `entities/`: Core domain models (User, Category, ItemListing, Favorite)
//!   - `views/`: Derived read models (listings with owner and category,
//!     categories paired with selected listings)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Collaborator interfaces (password hashing)
//!
//! # Usage
//!
//! ```rust,ignore
//! use bazaar::domain::{ItemListing, Owned};
//! use bazaar::ports::{ListingRepository, PasswordHasher};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Category, CategoryListings, DomainError, Favorite, FavoriteChanges, FavoriteDetails,
    FavoriteDraft, ItemListing, ListingDetails, ListingDraft, ListingFields, NewCategory,
    NewFavorite, NewListing, NewUser, Owned, SignUp, User, UserDraft,
};
pub use ports::{
    CategoryRepository, FavoriteRepository, ListingRepository, PasswordHasher, UserRepository,
};
