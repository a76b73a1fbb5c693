//! Favorite - A user's bookmark on a listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Owned;
use crate::domain::errors::DomainError;

/// Favorite - removed together with either its user or its listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub item_listing_id: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Favorite input as received from a caller
#[derive(Debug, Clone, Default)]
pub struct FavoriteDraft {
    pub item_listing_id: Option<i64>,
    pub note: Option<String>,
}

/// A favorite ready to be inserted
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub user_id: i64,
    pub item_listing_id: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update. `note: None` keeps the stored note,
/// `note: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct FavoriteChanges {
    pub note: Option<Option<String>>,
}

impl FavoriteDraft {
    /// Bind the draft to its owner
    pub fn into_new(self, user_id: i64) -> Result<NewFavorite, DomainError> {
        let item_listing_id = self
            .item_listing_id
            .ok_or_else(|| DomainError::validation("item_listing_id is required"))?;

        Ok(NewFavorite {
            user_id,
            item_listing_id,
            note: self.note,
            created_at: Utc::now(),
        })
    }
}

impl Favorite {
    pub fn apply(self, changes: FavoriteChanges) -> Self {
        Self {
            note: changes.note.unwrap_or(self.note),
            ..self
        }
    }
}

impl Owned for Favorite {
    const ENTITY: &'static str = "Favorite";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite() -> Favorite {
        Favorite {
            id: 1,
            user_id: 2,
            item_listing_id: 3,
            note: Some("gift idea".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_new_requires_listing() {
        let err = FavoriteDraft::default().into_new(1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_into_new_binds_owner() {
        let new = FavoriteDraft {
            item_listing_id: Some(5),
            note: None,
        }
        .into_new(42)
        .unwrap();
        assert_eq!(new.user_id, 42);
        assert_eq!(new.item_listing_id, 5);
    }

    #[test]
    fn test_apply_absent_note_keeps_value() {
        let updated = favorite().apply(FavoriteChanges::default());
        assert_eq!(updated.note.as_deref(), Some("gift idea"));
    }

    #[test]
    fn test_apply_null_note_clears_value() {
        let updated = favorite().apply(FavoriteChanges { note: Some(None) });
        assert_eq!(updated.note, None);
    }

    #[test]
    fn test_apply_only_touches_note() {
        let original = favorite();
        let updated = original.clone().apply(FavoriteChanges {
            note: Some(Some("for later".to_string())),
        });
        assert_eq!(updated.note.as_deref(), Some("for later"));
        assert_eq!(updated.user_id, original.user_id);
        assert_eq!(updated.item_listing_id, original.item_listing_id);
        assert_eq!(updated.created_at, original.created_at);
    }
}
