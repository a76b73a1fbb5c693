//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and collaborators.

mod category_service;
mod favorite_service;
mod listing_service;
mod user_service;

pub use category_service::CategoryService;
pub use favorite_service::FavoriteService;
pub use listing_service::ListingService;
pub use user_service::UserService;

use bazaar::{DomainError, Owned};

/// Resolve a looked-up record for mutation by `caller_id`.
///
/// A missing row is `NotFound` regardless of who asks; only an existing row
/// owned by someone else is `Forbidden`.
fn require_owned<T: Owned>(record: Option<T>, id: i64, caller_id: i64) -> Result<T, DomainError> {
    let record = record.ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;

    if let Err(e) = record.ensure_owned_by(caller_id) {
        tracing::warn!(
            entity = T::ENTITY,
            id,
            caller_id,
            owner_id = record.owner_id(),
            "Rejected mutation by non-owner"
        );
        return Err(e);
    }

    Ok(record)
}
