use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{
    Argon2PasswordHasher, SqliteCategoryRepository, SqliteFavoriteRepository,
    SqliteListingRepository, SqliteUserRepository,
};
use application::{CategoryService, FavoriteService, ListingService, UserService};
use auth::TokenSigner;
use config::AppConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppUserService = UserService<SqliteUserRepository, Argon2PasswordHasher>;
pub type AppCategoryService =
    CategoryService<SqliteCategoryRepository, SqliteListingRepository, SqliteUserRepository>;
pub type AppListingService = ListingService<SqliteListingRepository, SqliteCategoryRepository>;
pub type AppFavoriteService = FavoriteService<SqliteFavoriteRepository, SqliteListingRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub category_service: Arc<AppCategoryService>,
    pub listing_service: Arc<AppListingService>,
    pub favorite_service: Arc<AppFavoriteService>,
    pub tokens: Arc<TokenSigner>,
}

impl AppState {
    /// Wire every service to one pool
    pub fn new(pool: SqlitePool, hasher: Argon2PasswordHasher, tokens: TokenSigner) -> Self {
        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let categories = Arc::new(SqliteCategoryRepository::new(pool.clone()));
        let listings = Arc::new(SqliteListingRepository::new(pool.clone()));
        let favorites = Arc::new(SqliteFavoriteRepository::new(pool));

        Self {
            user_service: Arc::new(UserService::new(users.clone(), Arc::new(hasher))),
            category_service: Arc::new(CategoryService::new(
                categories.clone(),
                listings.clone(),
                users,
            )),
            listing_service: Arc::new(ListingService::new(listings.clone(), categories)),
            favorite_service: Arc::new(FavoriteService::new(favorites, listings)),
            tokens: Arc::new(tokens),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Bazaar API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full HTTP application: public routes, token-protected API, and docs
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::auth::router())
        .merge(routes::users::router())
        .merge(routes::categories::router())
        .merge(routes::listings::router())
        .merge(routes::favorites::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::auth::public_router())
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛒 Bazaar API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key));

    let pool = adapters::sqlite::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let state = AppState::new(
        pool,
        Argon2PasswordHasher::new(),
        TokenSigner::new(config.token_secret, config.token_ttl_secs),
    );

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Bazaar API ready");

    Ok(app(state).into())
}
