//! Category wire models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bazaar::{Category, CategoryListings};

use super::ListingResponse;

/// Create Category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub listings: String,
}

/// Category response with the listings selected for the request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub listings: Vec<ListingResponse>,
    pub links: CategoryLinks,
}

impl CategoryResponse {
    fn build(category: Category, listings: Vec<ListingResponse>) -> Self {
        Self {
            links: CategoryLinks {
                self_link: format!("/api/categories/{}", category.id),
                listings: format!("/api/listings?category_id={}", category.id),
            },
            id: category.id,
            name: category.name,
            listings,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self::build(category, Vec::new())
    }
}

impl From<CategoryListings> for CategoryResponse {
    fn from(view: CategoryListings) -> Self {
        let listings = view.listings.into_iter().map(Into::into).collect();
        Self::build(view.category, listings)
    }
}
