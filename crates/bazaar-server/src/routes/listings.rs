//! Listing Routes
//!
//! Mutations are restricted to the listing's owner.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{CategoryFilter, ListingRequest, ListingResponse};
use crate::AppState;

/// List listings, optionally within one category
#[utoipa::path(
    get,
    path = "/api/listings",
    params(CategoryFilter),
    responses(
        (status = 200, description = "Listings", body = Vec<ListingResponse>)
    ),
    security(("bearer" = [])),
    tag = "Listing"
)]
pub async fn list_listings(
    State(state): State<AppState>,
    filter: Result<Query<CategoryFilter>, QueryRejection>,
) -> Result<Json<Vec<ListingResponse>>, ApiError> {
    let Query(filter) = filter?;
    let listings = state.listing_service.list(filter.category_id).await?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

/// Create a listing owned by the caller
#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = ListingRequest,
    responses(
        (status = 201, description = "Listing created", body = ListingResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer" = [])),
    tag = "Listing"
)]
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    payload: Result<Json<ListingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ListingResponse>), ApiError> {
    let Json(payload) = payload?;
    let listing = state
        .listing_service
        .create(caller, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(listing.into())))
}

/// Get Listing by ID
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    params(
        ("id" = i64, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing found", body = ListingResponse),
        (status = 404, description = "Listing not found")
    ),
    security(("bearer" = [])),
    tag = "Listing"
)]
pub async fn get_listing(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ListingResponse>, ApiError> {
    let Path(id) = id?;
    let listing = state.listing_service.get(id).await?;
    Ok(Json(listing.into()))
}

/// Replace a listing's fields
#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    params(
        ("id" = i64, Path, description = "Listing ID")
    ),
    request_body = ListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = ListingResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 403, description = "Listing belongs to another user"),
        (status = 404, description = "Listing not found")
    ),
    security(("bearer" = [])),
    tag = "Listing"
)]
pub async fn update_listing(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ListingRequest>, JsonRejection>,
) -> Result<Json<ListingResponse>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let listing = state
        .listing_service
        .update(id, caller, payload.into())
        .await?;

    Ok(Json(listing.into()))
}

/// Delete a listing and every favorite pointing at it
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    params(
        ("id" = i64, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 403, description = "Listing belongs to another user"),
        (status = 404, description = "Listing not found")
    ),
    security(("bearer" = [])),
    tag = "Listing"
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.listing_service.delete(id, caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/listings", get(list_listings).post(create_listing))
        .route(
            "/api/listings/:id",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
}
