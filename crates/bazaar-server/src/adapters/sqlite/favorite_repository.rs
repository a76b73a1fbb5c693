//! SQLite implementation of FavoriteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bazaar::{
    DomainError, Favorite, FavoriteDetails, FavoriteRepository, ListingDetails, NewFavorite,
};

use super::listing_repository::{ListingDetailsRow, LISTING_DETAILS_COLUMNS, LISTING_DETAILS_JOINS};
use super::{map_reference_error, repository_error};

const FAVORITE_COLUMNS: &str = "id, user_id, item_listing_id, note, created_at";

const FAVORITE_DETAILS_COLUMNS: &str = r#"
    f.id AS favorite_id, f.user_id AS favorite_user_id,
    f.note AS favorite_note, f.created_at AS favorite_created_at
"#;

/// SQLite implementation of FavoriteRepository
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteRow {
    id: i64,
    user_id: i64,
    item_listing_id: i64,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            item_listing_id: row.item_listing_id,
            note: row.note,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteDetailsRow {
    favorite_id: i64,
    favorite_user_id: i64,
    favorite_note: Option<String>,
    favorite_created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    listing: ListingDetailsRow,
}

impl From<FavoriteDetailsRow> for FavoriteDetails {
    fn from(row: FavoriteDetailsRow) -> Self {
        let listing = ListingDetails::from(row.listing);

        Self {
            favorite: Favorite {
                id: row.favorite_id,
                user_id: row.favorite_user_id,
                item_listing_id: listing.listing.id,
                note: row.favorite_note,
                created_at: row.favorite_created_at,
            },
            listing,
        }
    }
}

fn favorite_details_query(filter: &str) -> String {
    format!(
        r#"
        SELECT {FAVORITE_DETAILS_COLUMNS}, {LISTING_DETAILS_COLUMNS}
        FROM favorites f
        JOIN item_listings l ON l.id = f.item_listing_id
        {LISTING_DETAILS_JOINS}
        WHERE {filter}
        ORDER BY f.id
        "#
    )
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, DomainError> {
        let row = sqlx::query_as::<_, FavoriteRow>(&format!(
            "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_details(&self, id: i64) -> Result<Option<FavoriteDetails>, DomainError> {
        let row = sqlx::query_as::<_, FavoriteDetailsRow>(&favorite_details_query("f.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_user(
        &self,
        user_id: i64,
        item_listing_id: Option<i64>,
    ) -> Result<Vec<FavoriteDetails>, DomainError> {
        let rows = sqlx::query_as::<_, FavoriteDetailsRow>(&favorite_details_query(
            "f.user_id = $1 AND ($2 IS NULL OR f.item_listing_id = $2)",
        ))
        .bind(user_id)
        .bind(item_listing_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, favorite: &NewFavorite) -> Result<Favorite, DomainError> {
        let row = sqlx::query_as::<_, FavoriteRow>(&format!(
            r#"
            INSERT INTO favorites (user_id, item_listing_id, note, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {FAVORITE_COLUMNS}
            "#
        ))
        .bind(favorite.user_id)
        .bind(favorite.item_listing_id)
        .bind(&favorite.note)
        .bind(favorite.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(row.into())
    }

    async fn update(&self, favorite: &Favorite) -> Result<Favorite, DomainError> {
        let row = sqlx::query_as::<_, FavoriteRow>(&format!(
            "UPDATE favorites SET note = $2 WHERE id = $1 RETURNING {FAVORITE_COLUMNS}"
        ))
        .bind(favorite.id)
        .bind(&favorite.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("Favorite", favorite.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
