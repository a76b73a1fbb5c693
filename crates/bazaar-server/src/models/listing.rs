//! Listing wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bazaar::{Category, ListingDetails, ListingDraft};

use super::{lenient_id, UserResponse};

/// Create or replace a listing.
///
/// Any `user_id` in the body is ignored; the owner is the caller.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<i64>,
}

impl From<ListingRequest> for ListingDraft {
    fn from(request: ListingRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            category_id: request.category_id,
        }
    }
}

/// Optional category filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryFilter {
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub owner: String,
    pub category: Option<String>,
}

/// Category reference embedded in a listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategorySummary {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Listing response with its owner and category embedded
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub category_id: Option<i64>,
    pub category: Option<CategorySummary>,
    pub owner: UserResponse,
    pub links: ListingLinks,
}

impl From<ListingDetails> for ListingResponse {
    fn from(details: ListingDetails) -> Self {
        let listing = details.listing;
        Self {
            links: ListingLinks {
                self_link: format!("/api/listings/{}", listing.id),
                owner: format!("/api/users/{}", listing.user_id),
                category: listing
                    .category_id
                    .map(|id| format!("/api/categories/{id}")),
            },
            id: listing.id,
            title: listing.title,
            description: listing.description,
            price: listing.price,
            image_url: listing.image_url,
            created_at: listing.created_at,
            user_id: listing.user_id,
            category_id: listing.category_id,
            category: details.category.map(Into::into),
            owner: details.owner.into(),
        }
    }
}
