//! Server configuration
//!
//! Values come from Shuttle secrets (`Secrets.toml`). Lookup goes through a
//! closure so the defaults can be exercised without a runtime.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bazaar.db";
pub const DEFAULT_TOKEN_SECRET: &str = "super-secret";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub token_secret: String,
    pub token_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let token_secret = get("JWT_SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("⚠️  No JWT_SECRET_KEY set - using the development default");
            DEFAULT_TOKEN_SECRET.to_string()
        });

        let token_ttl_secs = match get("TOKEN_TTL_SECS").map(|v| v.parse::<i64>()) {
            Some(Ok(secs)) if secs > 0 => secs,
            Some(_) => {
                tracing::warn!("⚠️  Invalid TOKEN_TTL_SECS - using {DEFAULT_TOKEN_TTL_SECS}");
                DEFAULT_TOKEN_TTL_SECS
            }
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Self {
            database_url,
            token_secret,
            token_ttl_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.token_secret, DEFAULT_TOKEN_SECRET);
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "sqlite://market.db"),
            ("JWT_SECRET_KEY", "s3cr3t"),
            ("TOKEN_TTL_SECS", "3600"),
        ]);
        assert_eq!(config.database_url, "sqlite://market.db");
        assert_eq!(config.token_secret, "s3cr3t");
        assert_eq!(config.token_ttl_secs, 3600);
    }

    #[test]
    fn test_invalid_ttl_falls_back() {
        assert_eq!(
            config(&[("TOKEN_TTL_SECS", "soon")]).token_ttl_secs,
            DEFAULT_TOKEN_TTL_SECS
        );
        assert_eq!(
            config(&[("TOKEN_TTL_SECS", "-5")]).token_ttl_secs,
            DEFAULT_TOKEN_TTL_SECS
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = config(&[("JWT_SECRET_KEY", "  ")]);
        assert_eq!(config.token_secret, DEFAULT_TOKEN_SECRET);
    }
}
