//! Argon2 implementation of PasswordHasher

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};

use bazaar::{DomainError, PasswordHasher};

/// Argon2id with default parameters and a random salt per hash
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Argon2id with explicit cost parameters
    #[cfg(test)]
    pub fn with_params(params: argon2::Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Argon2 password hashing failed");
                DomainError::Repository(format!("Password hashing failed: {e}"))
            })
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            tracing::error!(error = %e, "Stored password hash is malformed");
            DomainError::Repository(format!("Invalid stored password hash: {e}"))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Repository(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
