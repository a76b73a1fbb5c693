//! Bazaar Wire Models
//!
//! Request and response bodies for the HTTP API. Responses carry
//! hyperlinks computed from entity ids; password hashes never appear.
//!
//! - User: sign-up, login, account
//! - Category: categories with nested listings
//! - Listing: item listings
//! - Favorite: bookmarks with notes

mod category;
mod favorite;
mod listing;
mod user;

pub use category::*;
pub use favorite::*;
pub use listing::*;
pub use user::*;

use serde::{de::Error as _, Deserialize, Deserializer};

/// Accept an id given either as a JSON integer or as a numeric string
/// (HTML form selects submit strings)
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Not a valid integer: {text:?}"))),
    }
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field
/// (`None`, via `#[serde(default)]`)
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
