//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `VIACEP_BASE_URL` - Postal code lookup service (default: <https://viacep.com.br/ws>)
//! - `CEP_CACHE_TTL_SECS` - How long lookups are cached (default: 3600)
//! - `CEP_TIMEOUT_SECS` - Lookup request timeout (default: 5)
//! - `HOME_DELIVERY_FEE` - Flat freight for home delivery (default: 11.44)
//! - `LOYALTY_POINTS_DISCOUNT` - Discount when paying with points (default: 5.00)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `LOG_FORMAT` - `json` for structured logs, anything else for pretty output

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use atadiesel_core::PricingRules;
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Postal code lookup settings
    pub cep: CepLookupConfig,
    /// Checkout pricing
    pub pricing: PricingRules,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. `production`)
    pub sentry_environment: Option<String>,
    /// Emit logs as JSON
    pub json_logs: bool,
}

/// ViaCEP client configuration.
#[derive(Debug, Clone)]
pub struct CepLookupConfig {
    /// Base URL; requests go to `{base_url}/{cep}/json/`
    pub base_url: Url,
    pub cache_ttl: Duration,
    pub timeout: Duration,
}

const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

impl StorefrontConfig {
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
        let host = parse_env(&lookup, "STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env(&lookup, "STOREFRONT_PORT", "3000")?;

        let base_url = parse_env(&lookup, "VIACEP_BASE_URL", DEFAULT_VIACEP_BASE_URL)?;
        let cache_ttl = Duration::from_secs(parse_env(&lookup, "CEP_CACHE_TTL_SECS", "3600")?);
        let timeout = Duration::from_secs(parse_env(&lookup, "CEP_TIMEOUT_SECS", "5")?);

        let pricing = PricingRules {
            home_delivery_fee: parse_env::<Decimal>(&lookup, "HOME_DELIVERY_FEE", "11.44")?,
            points_discount: parse_env::<Decimal>(&lookup, "LOYALTY_POINTS_DISCOUNT", "5.00")?,
        };

        Ok(Self {
            host,
            port,
            cep: CepLookupConfig {
                base_url,
                cache_ttl,
                timeout,
            },
            pricing,
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

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
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
    get_env_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
