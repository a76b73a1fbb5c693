//! Bazaar API Routes
//!
//! - /api/signup, /api/login - account creation and tokens (public)
//! - /api/me - the authenticated caller and their derived views
//! - /api/users/:id - user lookup
//! - /api/categories - categories and their listings
//! - /api/listings - item listings
//! - /api/favorites - the caller's bookmarks

pub mod auth;
pub mod categories;
pub mod favorites;
pub mod listings;
pub mod swagger;
pub mod users;
