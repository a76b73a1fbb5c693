//! Account Routes - sign-up, login, and the caller's own views

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{
    CategoryFilter, CategoryResponse, ListingResponse, LoginRequest, SignupRequest, TokenResponse,
    UserResponse,
};
use crate::AppState;

/// Create an account
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid fields or username/email taken")
    ),
    tag = "Account"
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload?;
    let user = state.user_service.sign_up(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "Account"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;
    let user = state
        .user_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        access_token: state.tokens.issue(user.id)?,
    }))
}

/// The authenticated user
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get(caller).await?;
    Ok(Json(user.into()))
}

/// Delete the authenticated user's account with all their listings and favorites
#[utoipa::path(
    delete,
    path = "/api/me",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
pub async fn delete_me(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete(caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Categories the caller has listed in, each with only the caller's listings
#[utoipa::path(
    get,
    path = "/api/me/categories",
    responses(
        (status = 200, description = "Caller's categories", body = Vec<CategoryResponse>)
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
pub async fn my_categories(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let views = state.category_service.list_for_user(caller).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// The caller's listings
#[utoipa::path(
    get,
    path = "/api/me/listings",
    params(CategoryFilter),
    responses(
        (status = 200, description = "Caller's listings", body = Vec<ListingResponse>)
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
pub async fn my_listings(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    filter: Result<Query<CategoryFilter>, QueryRejection>,
) -> Result<Json<Vec<ListingResponse>>, ApiError> {
    let Query(filter) = filter?;
    let listings = state
        .listing_service
        .list_for_user(caller, filter.category_id)
        .await?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

/// Routes reachable without a token
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/me", get(me).delete(delete_me))
        .route("/api/me/categories", get(my_categories))
        .route("/api/me/listings", get(my_listings))
}
