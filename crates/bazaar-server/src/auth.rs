//! Bearer Token Authentication
//!
//! Tokens have the form `<user_id>.<expires_at>.<signature>` where the
//! signature is hex-encoded HMAC-SHA256 over `<user_id>.<expires_at>`.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use hmac::{digest::InvalidLength, Hmac, Mac};
use sha2::Sha256;

use bazaar::DomainError;

use crate::error::ApiError;
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Identity of the authenticated caller, inserted by `auth_middleware`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub i64);

/// Issues and verifies signed bearer tokens
pub struct TokenSigner {
    secret: String,
    ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    pub fn issue(&self, user_id: i64) -> Result<String, DomainError> {
        self.issue_at(user_id, chrono::Utc::now().timestamp())
            .map_err(|e| {
                tracing::error!(error = %e, "Token signing key rejected");
                DomainError::Repository(format!("Token signing failed: {e}"))
            })
    }

    /// The user id carried by a valid, unexpired token
    pub fn verify(&self, token: &str) -> Option<i64> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: i64, now: i64) -> Result<String, InvalidLength> {
        let claims = format!("{}.{}", user_id, now.saturating_add(self.ttl_secs));
        let signature = hex::encode(self.mac(&claims)?.finalize().into_bytes());
        Ok(format!("{claims}.{signature}"))
    }

    fn verify_at(&self, token: &str, now: i64) -> Option<i64> {
        let (claims, signature) = token.rsplit_once('.')?;
        let (user_id, expires_at) = claims.split_once('.')?;
        let user_id = user_id.parse::<i64>().ok()?;
        let expires_at = expires_at.parse::<i64>().ok()?;

        let signature = hex::decode(signature).ok()?;
        self.mac(claims).ok()?.verify_slice(&signature).ok()?;

        (expires_at > now).then_some(user_id)
    }

    /// HMAC accepts keys of any length, so this only fails for digests
    /// with a fixed key size
    fn mac(&self, claims: &str) -> Result<HmacSha256, InvalidLength> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())?;
        mac.update(claims.as_bytes());
        Ok(mac)
    }
}

/// Authentication middleware.
/// Validates the Bearer token and records the caller as `AuthUser`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(value) => value.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            DomainError::Unauthorized("Invalid Authorization header format".to_string())
        })?,
        None => {
            tracing::warn!("Missing Authorization header");
            return Err(
                DomainError::Unauthorized("Missing Authorization Header".to_string()).into(),
            );
        }
    };

    let user_id = state.tokens.verify(token.trim()).ok_or_else(|| {
        tracing::warn!("Invalid or expired token attempted");
        DomainError::Unauthorized("Invalid or expired token".to_string())
    })?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let signer = TokenSigner::new("test-secret", 60);
        let token = signer.issue(7).unwrap();
        assert_eq!(signer.verify(&token), Some(7));
    }

    #[test]
    fn test_token_shape() {
        let signer = TokenSigner::new("test-secret", 60);
        let token = signer.issue_at(7, 1_000).unwrap();
        let parts: Vec<_> = token.split('.').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "7");
        assert_eq!(parts[1], "1060");
        assert_eq!(parts[2].len(), 64);
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new("test-secret", 60);
        let token = signer.issue_at(7, 1_000).unwrap();

        assert_eq!(signer.verify_at(&token, 1_059), Some(7));
        assert_eq!(signer.verify_at(&token, 1_060), None);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let signer = TokenSigner::new("test-secret", 60);
        let token = signer.issue_at(7, 1_000).unwrap();
        let forged = token.replacen("7.", "8.", 1);

        assert_eq!(signer.verify_at(&forged, 1_000), None);
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = TokenSigner::new("test-secret", 60).issue(7).unwrap();
        assert_eq!(TokenSigner::new("other-secret", 60).verify(&token), None);
    }

    #[test]
    fn test_garbage_rejected() {
        let signer = TokenSigner::new("test-secret", 60);
        for token in ["", "abc", "1.2", "1.2.zz", "x.2.00"] {
            assert_eq!(signer.verify(token), None);
        }
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let signer = TokenSigner::new("test-secret", i64::MAX);
        let token = signer.issue_at(7, 1_000).unwrap();

        assert!(token.starts_with(&format!("7.{}.", i64::MAX)));
        assert_eq!(signer.verify_at(&token, 1_000), Some(7));
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let signer = TokenSigner::new("", 60);
        let token = signer.issue(7).unwrap();

        assert_eq!(signer.verify(&token), Some(7));
    }
}
