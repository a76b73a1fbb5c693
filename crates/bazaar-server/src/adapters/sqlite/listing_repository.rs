//! SQLite implementation of ListingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bazaar::{
    Category, DomainError, ItemListing, ListingDetails, ListingRepository, NewListing, User,
};

use super::{map_reference_error, repository_error};

const LISTING_COLUMNS: &str =
    "id, title, description, price, image_url, created_at, user_id, category_id";

/// Listing columns plus owner and category, for `ListingDetailsRow`.
/// Expects `l`, `u` and `c` aliases as in `LISTING_DETAILS_JOINS`.
pub(super) const LISTING_DETAILS_COLUMNS: &str = r#"
    l.id, l.title, l.description, l.price, l.image_url, l.created_at, l.user_id, l.category_id,
    u.username AS owner_username, u.email AS owner_email,
    u.password_hash AS owner_password_hash, u.created_at AS owner_created_at,
    c.name AS category_name
"#;

pub(super) const LISTING_DETAILS_JOINS: &str = r#"
    JOIN users u ON u.id = l.user_id
    LEFT JOIN categories c ON c.id = l.category_id
"#;

/// SQLite implementation of ListingRepository
pub struct SqliteListingRepository {
    pool: SqlitePool,
}

impl SqliteListingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ListingRow {
    id: i64,
    title: String,
    description: String,
    price: Option<f64>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    user_id: i64,
    category_id: Option<i64>,
}

impl From<ListingRow> for ItemListing {
    fn from(row: ListingRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            created_at: row.created_at,
            user_id: row.user_id,
            category_id: row.category_id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ListingDetailsRow {
    #[sqlx(flatten)]
    listing: ListingRow,
    owner_username: String,
    owner_email: String,
    owner_password_hash: String,
    owner_created_at: DateTime<Utc>,
    category_name: Option<String>,
}

impl From<ListingDetailsRow> for ListingDetails {
    fn from(row: ListingDetailsRow) -> Self {
        let listing = ItemListing::from(row.listing);
        let owner = User {
            id: listing.user_id,
            username: row.owner_username,
            email: row.owner_email,
            password_hash: row.owner_password_hash,
            created_at: row.owner_created_at,
        };
        let category = listing
            .category_id
            .zip(row.category_name)
            .map(|(id, name)| Category { id, name });

        Self {
            listing,
            owner,
            category,
        }
    }
}

#[async_trait]
impl ListingRepository for SqliteListingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemListing>, DomainError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM item_listings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_details(&self, id: i64) -> Result<Option<ListingDetails>, DomainError> {
        let row = sqlx::query_as::<_, ListingDetailsRow>(&format!(
            "SELECT {LISTING_DETAILS_COLUMNS} FROM item_listings l {LISTING_DETAILS_JOINS} WHERE l.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<ListingDetails>, DomainError> {
        let rows = sqlx::query_as::<_, ListingDetailsRow>(&format!(
            r#"
            SELECT {LISTING_DETAILS_COLUMNS} FROM item_listings l {LISTING_DETAILS_JOINS}
            WHERE ($1 IS NULL OR l.category_id = $1)
            ORDER BY l.id
            "#
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_owner(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<ListingDetails>, DomainError> {
        let rows = sqlx::query_as::<_, ListingDetailsRow>(&format!(
            r#"
            SELECT {LISTING_DETAILS_COLUMNS} FROM item_listings l {LISTING_DETAILS_JOINS}
            WHERE l.user_id = $1 AND ($2 IS NULL OR l.category_id = $2)
            ORDER BY l.id
            "#
        ))
        .bind(user_id)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, listing: &NewListing) -> Result<ItemListing, DomainError> {
        let fields = &listing.fields;
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            INSERT INTO item_listings
                (title, description, price, image_url, created_at, user_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.image_url)
        .bind(listing.created_at)
        .bind(listing.user_id)
        .bind(fields.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(row.into())
    }

    async fn update(&self, listing: &ItemListing) -> Result<ItemListing, DomainError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            UPDATE item_listings
            SET title = $2, description = $3, price = $4, image_url = $5, category_id = $6
            WHERE id = $1
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(listing.id)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(&listing.image_url)
        .bind(listing.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_reference_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("ItemListing", listing.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM item_listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;
    use bazaar::{ListingFields, NewListing};

    fn fields(category_id: i64) -> ListingFields {
        ListingFields {
            title: "Go Book".to_string(),
            description: "x".to_string(),
            price: None,
            image_url: None,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_insert_with_missing_owner_is_not_found() {
        let repo = SqliteListingRepository::new(memory_pool().await);

        let err = repo
            .insert(&NewListing::new(42, fields(7)))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_details_join_owner_and_category() {
        let pool = memory_pool().await;
        let repo = SqliteListingRepository::new(pool.clone());

        sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at) \
             VALUES ('alice', 'alice@example.com', 'hash', '2025-01-01T00:00:00Z')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO categories (name) VALUES ('Books')")
            .execute(&pool)
            .await
            .unwrap();

        let listing = repo.insert(&NewListing::new(1, fields(1))).await.unwrap();
        let details = repo.find_details(listing.id).await.unwrap().unwrap();

        assert_eq!(details.listing, listing);
        assert_eq!(details.owner.username, "alice");
        assert_eq!(details.category.as_ref().map(|c| c.name.as_str()), Some("Books"));

        sqlx::query("DELETE FROM categories WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        let details = repo.find_details(listing.id).await.unwrap().unwrap();
        assert_eq!(details.listing.category_id, None);
        assert_eq!(details.category, None);
        assert!(repo.find_details(999).await.unwrap().is_none());
    }
}
