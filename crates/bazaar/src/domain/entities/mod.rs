//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: account that owns listings and favorites
//! - Category: named bucket for listings
//! - ItemListing: an item offered by its owner
//! - Favorite: a user's bookmark on a listing, with an optional note

mod category;
mod favorite;
mod listing;
mod user;

pub use category::*;
pub use favorite::*;
pub use listing::*;
pub use user::*;

use crate::domain::errors::DomainError;

/// Trim a required text field, rejecting blanks and overlong values
pub(crate) fn required_text(
    field: &str,
    value: Option<String>,
    max_len: Option<usize>,
) -> Result<String, DomainError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::validation(format!("{field} is required")))?;

    check_len(field, &value, max_len)?;
    Ok(value)
}

pub(crate) fn check_len(
    field: &str,
    value: &str,
    max_len: Option<usize>,
) -> Result<(), DomainError> {
    match max_len {
        Some(max) if value.chars().count() > max => Err(DomainError::validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Optional text that treats blank input as absent
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Records that belong to exactly one user and may only be mutated by them
pub trait Owned {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> i64;

    fn owner_id(&self) -> i64;

    fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id() == user_id
    }

    /// Fails with `Forbidden` when `caller_id` is not the owner.
    ///
    /// Callers look the record up first, so a missing row surfaces as
    /// `NotFound` before this check ever runs.
    fn ensure_owned_by(&self, caller_id: i64) -> Result<(), DomainError> {
        if self.is_owned_by(caller_id) {
            Ok(())
        } else {
            Err(DomainError::not_owner(Self::ENTITY, self.id()))
        }
    }
}
