//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.
//!
//! Implementations must enforce the relational rules in the store itself:
//! unique usernames, emails and category names; cascade delete from users
//! and listings; set-null from categories.

mod category_repository;
mod favorite_repository;
mod listing_repository;
mod user_repository;

pub use category_repository::*;
pub use favorite_repository::*;
pub use listing_repository::*;
pub use user_repository::*;
