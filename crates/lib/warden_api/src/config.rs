//! API server configuration.

use std::fmt;

use chrono::Duration;
use thiserror::Error;
use warden_core::auth::jwt::DEFAULT_TOKEN_LIFETIME_SECS;

/// Configuration errors. Raised at startup; there are no fallback secrets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Configuration for the API.
#[derive(Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// How long an issued session token stays valid.
    pub token_lifetime: Duration,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable         | Default                   |
    /// |------------------|---------------------------|
    /// | `DATABASE_URL`   | required                  |
    /// | `JWT_SECRET`     | required, non-empty       |
    /// | `TOKEN_TTL_SECS` | `3600`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let jwt_secret = required(&lookup, "JWT_SECRET")?;
        let token_lifetime = match lookup("TOKEN_TTL_SECS") {
            None => Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS),
            Some(raw) => parse_lifetime(&raw)?,
        };
        Ok(Self {
            database_url,
            jwt_secret,
            token_lifetime,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_lifetime(raw: &str) -> Result<Duration, ConfigError> {
    let secs: i64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        name: "TOKEN_TTL_SECS",
        reason: format!("{e}"),
    })?;
    if secs <= 0 {
        return Err(ConfigError::Invalid {
            name: "TOKEN_TTL_SECS",
            reason: "must be positive".into(),
        });
    }
    Ok(Duration::seconds(secs))
}
