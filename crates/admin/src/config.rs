//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `LOG_FORMAT` - `json` for structured logs, anything else for pretty output

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. `production`)
    pub sentry_environment: Option<String>,
    /// Emit logs as JSON
    pub json_logs: bool,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_env(&lookup, "ADMIN_HOST", "127.0.0.1")?,
            port: parse_env(&lookup, "ADMIN_PORT", "3001")?,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            json_logs: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert!(config.sentry_dsn.is_none());
        assert!(!config.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = AdminConfig::from_lookup(|key| match key {
            "ADMIN_HOST" => Some("0.0.0.0".to_string()),
            "ADMIN_PORT" => Some("9001".to_string()),
            "SENTRY_DSN" => Some("https://key@sentry.example.com/1".to_string()),
            "LOG_FORMAT" => Some("json".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9001");
        assert!(config.sentry_dsn.is_some());
        assert!(config.json_logs);
    }

    #[test]
    fn test_invalid_port() {
        let err = AdminConfig::from_lookup(|key| {
            (key == "ADMIN_PORT").then(|| "70000".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "ADMIN_PORT"));
    }
}
