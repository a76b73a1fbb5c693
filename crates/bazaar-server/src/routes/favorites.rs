//! Favorite Routes
//!
//! Favorites are always scoped to the caller.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{
    CreateFavoriteRequest, FavoriteFilter, FavoriteResponse, UpdateFavoriteRequest,
};
use crate::AppState;

/// The caller's favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    params(FavoriteFilter),
    responses(
        (status = 200, description = "Caller's favorites", body = Vec<FavoriteResponse>)
    ),
    security(("bearer" = [])),
    tag = "Favorite"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    filter: Result<Query<FavoriteFilter>, QueryRejection>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let Query(filter) = filter?;
    let favorites = state
        .favorite_service
        .list_for_user(caller, filter.item_listing_id)
        .await?;

    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}

/// Favorite a listing
#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteResponse),
        (status = 400, description = "Missing or invalid item_listing_id"),
        (status = 404, description = "Listing not found")
    ),
    security(("bearer" = [])),
    tag = "Favorite"
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    let Json(payload) = payload?;
    let favorite = state
        .favorite_service
        .create(caller, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into())))
}

/// Change a favorite's note
#[utoipa::path(
    put,
    path = "/api/favorites/{id}",
    params(
        ("id" = i64, Path, description = "Favorite ID")
    ),
    request_body = UpdateFavoriteRequest,
    responses(
        (status = 200, description = "Favorite updated", body = FavoriteResponse),
        (status = 403, description = "Favorite belongs to another user"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer" = [])),
    tag = "Favorite"
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateFavoriteRequest>, JsonRejection>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let favorite = state
        .favorite_service
        .update(id, caller, payload.into())
        .await?;

    Ok(Json(favorite.into()))
}

/// Remove a favorite
#[utoipa::path(
    delete,
    path = "/api/favorites/{id}",
    params(
        ("id" = i64, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 403, description = "Favorite belongs to another user"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer" = [])),
    tag = "Favorite"
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.favorite_service.delete(id, caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/favorites", get(list_favorites).post(create_favorite))
        .route(
            "/api/favorites/:id",
            put(update_favorite).delete(delete_favorite),
        )
}
