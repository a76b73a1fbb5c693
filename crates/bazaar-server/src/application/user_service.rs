//! User Application Service (Use Case)
//!
//! Sign-up, credential checks and account lookups.

use std::sync::Arc;

use bazaar::{DomainError, NewUser, PasswordHasher, User, UserDraft, UserRepository};

/// Application service for User operations
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repo: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repo: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repo, hasher }
    }

    /// Create a new account with a hashed password
    pub async fn sign_up(&self, draft: UserDraft) -> Result<User, DomainError> {
        let sign_up = draft.validate()?;

        if self
            .repo
            .find_by_username(&sign_up.username)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Username already exists".to_string()));
        }

        let password_hash = self.hasher.hash(&sign_up.password)?;
        let user = self
            .repo
            .insert(&NewUser::new(sign_up.username, sign_up.email, password_hash))
            .await?;

        tracing::info!("Created User: {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Check credentials. Unknown username and wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let invalid = || DomainError::Unauthorized("Invalid username or password".to_string());

        let Some(user) = self.repo.find_by_username(username.trim()).await? else {
            tracing::warn!("Login attempt for unknown username");
            return Err(invalid());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(invalid());
        }

        Ok(user)
    }

    /// Get a User by ID
    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Delete an account; the store cascades to listings and favorites
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("User", id));
        }

        tracing::info!("Deleted User: {}", id);
        Ok(())
    }
}
