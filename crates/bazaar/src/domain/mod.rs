//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, derived views, ownership rules and errors.

pub mod entities;
pub mod errors;
pub mod views;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use views::*;
