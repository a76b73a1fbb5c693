//! User - Marketplace account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required_text;
use crate::domain::errors::DomainError;

pub const USERNAME_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MIN_LEN: usize = 6;

/// User - owns listings and favorites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Opaque hash produced by the password hasher, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Sign-up input as received from a caller; every field may be missing
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated sign-up input. The password is still plain text here.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A user ready to be inserted, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserDraft {
    pub fn validate(self) -> Result<SignUp, DomainError> {
        let username = required_text("username", self.username, Some(USERNAME_MAX_LEN))?;
        let email = required_text("email", self.email, Some(EMAIL_MAX_LEN))?;

        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DomainError::validation("password is required"))?;
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(DomainError::validation(format!(
                "password must be at least {PASSWORD_MIN_LEN} characters"
            )));
        }

        Ok(SignUp {
            username,
            email,
            password,
        })
    }
}

impl NewUser {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
