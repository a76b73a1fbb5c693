//! Favorite wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bazaar::{FavoriteChanges, FavoriteDetails, FavoriteDraft};

use super::{lenient_id, present, ListingResponse};

/// Create Favorite request. Any `user_id` in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(value_type = Option<i64>)]
    pub item_listing_id: Option<i64>,
    pub note: Option<String>,
}

impl From<CreateFavoriteRequest> for FavoriteDraft {
    fn from(request: CreateFavoriteRequest) -> Self {
        Self {
            item_listing_id: request.item_listing_id,
            note: request.note,
        }
    }
}

/// Update Favorite request. Omit `note` to keep it, send `null` to clear it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFavoriteRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub note: Option<Option<String>>,
}

impl From<UpdateFavoriteRequest> for FavoriteChanges {
    fn from(request: UpdateFavoriteRequest) -> Self {
        Self { note: request.note }
    }
}

/// Optional listing filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteFilter {
    pub item_listing_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub listing: String,
}

/// Favorite response with the bookmarked listing embedded
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i64,
    pub user_id: i64,
    pub item_listing_id: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub listing: ListingResponse,
    pub links: FavoriteLinks,
}

impl From<FavoriteDetails> for FavoriteResponse {
    fn from(details: FavoriteDetails) -> Self {
        let favorite = details.favorite;
        Self {
            links: FavoriteLinks {
                self_link: format!("/api/favorites/{}", favorite.id),
                listing: format!("/api/listings/{}", favorite.item_listing_id),
            },
            id: favorite.id,
            user_id: favorite.user_id,
            item_listing_id: favorite.item_listing_id,
            note: favorite.note,
            created_at: favorite.created_at,
            listing: details.listing.into(),
        }
    }
}
