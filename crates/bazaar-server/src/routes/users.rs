//! User Routes

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::UserResponse;
use crate::AppState;

/// Get User by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;
    let user = state.user_service.get(id).await?;
    Ok(Json(user.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users/:id", get(get_user))
}
