//! Category Routes

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{CategoryResponse, CreateCategoryRequest, UserResponse};
use crate::AppState;

/// List all categories with all of their listings
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>)
    ),
    security(("bearer" = [])),
    tag = "Category"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let views = state.category_service.list_all().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Missing name or name already taken")
    ),
    security(("bearer" = [])),
    tag = "Category"
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let Json(payload) = payload?;
    let category = state.category_service.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Get a category with the caller's listings in it
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    security(("bearer" = [])),
    tag = "Category"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let Path(id) = id?;
    let view = state
        .category_service
        .get_with_user_listings(id, caller)
        .await?;

    Ok(Json(view.into()))
}

/// Delete a category. Its listings stay, uncategorized.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer" = [])),
    tag = "Category"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Users with at least one listing in the category
#[utoipa::path(
    get,
    path = "/api/categories/{id}/users",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Users listing in the category", body = Vec<UserResponse>),
        (status = 404, description = "Category not found")
    ),
    security(("bearer" = [])),
    tag = "Category"
)]
pub async fn category_users(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let Path(id) = id?;
    let users = state.category_service.list_users(id).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/:id",
            get(get_category).delete(delete_category),
        )
        .route("/api/categories/:id/users", get(category_users))
}
