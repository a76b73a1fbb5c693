//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::models::{
    CategoryLinks, CategoryResponse, CategorySummary, CreateCategoryRequest, CreateFavoriteRequest, FavoriteLinks,
    FavoriteResponse, ListingLinks, ListingRequest, ListingResponse, LoginRequest, SignupRequest,
    TokenResponse, UpdateFavoriteRequest, UserLinks, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Account endpoints
        super::auth::signup,
        super::auth::login,
        super::auth::me,
        super::auth::delete_me,
        super::auth::my_categories,
        super::auth::my_listings,
        // User endpoints
        super::users::get_user,
        // Category endpoints
        super::categories::list_categories,
        super::categories::create_category,
        super::categories::get_category,
        super::categories::delete_category,
        super::categories::category_users,
        // Listing endpoints
        super::listings::list_listings,
        super::listings::create_listing,
        super::listings::get_listing,
        super::listings::update_listing,
        super::listings::delete_listing,
        // Favorite endpoints
        super::favorites::list_favorites,
        super::favorites::create_favorite,
        super::favorites::update_favorite,
        super::favorites::delete_favorite,
    ),
    info(
        title = "Bazaar API",
        version = "0.1.0",
        description = "Marketplace backend: users list items under categories and bookmark listings with notes.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Account", description = "Sign-up, login, and the caller's own views"),
        (name = "User", description = "User lookup"),
        (name = "Category", description = "Categories and their listings"),
        (name = "Listing", description = "Item listings, mutable by their owner"),
        (name = "Favorite", description = "The caller's bookmarked listings"),
    ),
    components(
        schemas(
            // Account
            SignupRequest,
            LoginRequest,
            TokenResponse,
            UserResponse,
            UserLinks,
            // Category
            CreateCategoryRequest,
            CategoryResponse,
            CategoryLinks,
            // Listing
            ListingRequest,
            ListingResponse,
            ListingLinks,
            CategorySummary,
            // Favorite
            CreateFavoriteRequest,
            UpdateFavoriteRequest,
            FavoriteResponse,
            FavoriteLinks,
        )
    ),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected paths
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
