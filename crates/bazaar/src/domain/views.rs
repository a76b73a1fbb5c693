//! Derived Views
//!
//! Read models computed from relationships at query time. They pair an
//! entity with its related records instead of mutating the entity.

use serde::Serialize;

use crate::domain::entities::{Category, Favorite, ItemListing, User};

/// A listing with its owner and, if it still has one, its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDetails {
    pub listing: ItemListing,
    pub owner: User,
    pub category: Option<Category>,
}

/// A favorite with the listing it bookmarks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteDetails {
    pub favorite: Favorite,
    pub listing: ListingDetails,
}

/// A category together with the listings selected for this read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListings {
    pub category: Category,
    pub listings: Vec<ListingDetails>,
}

impl CategoryListings {
    pub fn new(category: Category, listings: Vec<ListingDetails>) -> Self {
        Self { category, listings }
    }

    /// Attach each listing to the category it references.
    ///
    /// Category order is preserved. Listings without a category, or whose
    /// category is not in `categories`, are dropped.
    pub fn group(categories: Vec<Category>, listings: Vec<ListingDetails>) -> Vec<Self> {
        let mut views: Vec<Self> = categories
            .into_iter()
            .map(|category| Self::new(category, Vec::new()))
            .collect();

        for details in listings {
            let Some(category_id) = details.listing.category_id else {
                continue;
            };
            if let Some(view) = views.iter_mut().find(|v| v.category.id == category_id) {
                view.listings.push(details);
            }
        }

        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn listing(id: i64, user_id: i64, category_id: Option<i64>) -> ListingDetails {
        ListingDetails {
            listing: ItemListing {
                id,
                title: format!("listing {id}"),
                description: "x".to_string(),
                price: None,
                image_url: None,
                created_at: Utc::now(),
                user_id,
                category_id,
            },
            owner: User {
                id: user_id,
                username: format!("user {user_id}"),
                email: format!("user{user_id}@example.com"),
                password_hash: String::new(),
                created_at: Utc::now(),
            },
            category: category_id.map(|id| category(id, "any")),
        }
    }

    #[test]
    fn test_group_attaches_by_category() {
        let views = CategoryListings::group(
            vec![category(1, "Books"), category(2, "Games")],
            vec![
                listing(10, 1, Some(2)),
                listing(11, 1, Some(1)),
                listing(12, 1, Some(2)),
            ],
        );

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].category.name, "Books");
        assert_eq!(
            views[0].listings.iter().map(|l| l.listing.id).collect::<Vec<_>>(),
            vec![11]
        );
        assert_eq!(
            views[1].listings.iter().map(|l| l.listing.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
    }

    #[test]
    fn test_group_drops_unmatched_listings() {
        let views = CategoryListings::group(
            vec![category(1, "Books")],
            vec![listing(10, 1, None), listing(11, 1, Some(99))],
        );

        assert_eq!(views.len(), 1);
        assert!(views[0].listings.is_empty());
    }

    #[test]
    fn test_listing_details_hide_owner_hash() {
        let mut details = listing(10, 1, Some(2));
        details.owner.password_hash = "argon2-hash".to_string();

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["owner"]["username"], "user 1");
        assert!(json["owner"].get("password_hash").is_none());
        assert_eq!(json["category"]["id"], 2);
    }
}
