//! Password Hasher Port
//!
//! The hash format is opaque to the domain; only the adapter that
//! produced a hash can verify it.

use crate::domain::errors::DomainError;

pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password for storage
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plain-text password against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}
