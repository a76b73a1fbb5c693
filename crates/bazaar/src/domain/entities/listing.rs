//! ItemListing - An item offered by its owner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_len, optional_text, required_text, Owned};
use crate::domain::errors::DomainError;

pub const TITLE_MAX_LEN: usize = 140;
pub const IMAGE_URL_MAX_LEN: usize = 200;

/// ItemListing - always owned by a user, optionally categorized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    /// Cleared by the store when the category is deleted
    pub category_id: Option<i64>,
}

/// Listing input as received from a caller.
///
/// Carries no owner field: the owner is always the
/// authenticated caller.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}

/// The full set of caller-mutable listing fields, validated
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category_id: i64,
}

/// A listing ready to be inserted
#[derive(Debug, Clone)]
pub struct NewListing {
    pub user_id: i64,
    pub fields: ListingFields,
    pub created_at: DateTime<Utc>,
}

impl ListingDraft {
    pub fn validate(self) -> Result<ListingFields, DomainError> {
        let title = required_text("title", self.title, Some(TITLE_MAX_LEN))?;
        let description = required_text("description", self.description, None)?;
        let category_id = self
            .category_id
            .ok_or_else(|| DomainError::validation("category_id is required"))?;

        let image_url = optional_text(self.image_url);
        if let Some(url) = &image_url {
            check_len("image_url", url, Some(IMAGE_URL_MAX_LEN))?;
        }

        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(DomainError::validation("price must be a finite number"));
            }
        }

        Ok(ListingFields {
            title,
            description,
            price: self.price,
            image_url,
            category_id,
        })
    }
}

impl NewListing {
    pub fn new(user_id: i64, fields: ListingFields) -> Self {
        Self {
            user_id,
            fields,
            created_at: Utc::now(),
        }
    }
}

impl ItemListing {
    /// Full replace of the mutable fields; id, owner and timestamp are kept
    pub fn replace(self, fields: ListingFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
            category_id: Some(fields.category_id),
            ..self
        }
    }
}

impl Owned for ItemListing {
    const ENTITY: &'static str = "ItemListing";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }
}
