//! ViaCEP client for postal code lookups.
//!
//! Requests go to `{base_url}/{digits}/json/`. ViaCEP answers `200` with
//! `{"erro": true}` for well-formed codes that don't exist, which maps to
//! `Ok(None)`. Both hits and misses are cached.

use std::sync::Arc;

use atadiesel_core::Cep;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CepLookupConfig;

/// Errors that can occur when talking to ViaCEP.
#[derive(Debug, Error)]
pub enum CepLookupError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// ViaCEP returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Address fields resolved from a postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Raw ViaCEP payload. Missing fields default to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViaCepResponse {
    logradouro: String,
    complemento: String,
    bairro: String,
    localidade: String,
    uf: String,
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    /// ViaCEP has sent both `true` and `"true"` for unknown codes.
    fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_address(self) -> Option<PostalAddress> {
        if self.is_error() {
            return None;
        }
        Some(PostalAddress {
            street: self.logradouro,
            complement: self.complemento,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
        })
    }
}

/// Parse a ViaCEP response body.
///
/// # Errors
///
/// Returns [`CepLookupError::Parse`] if the body is not a JSON object.
pub fn parse_response(body: &str) -> Result<Option<PostalAddress>, CepLookupError> {
    let response: ViaCepResponse =
        serde_json::from_str(body).map_err(|e| CepLookupError::Parse(e.to_string()))?;
    Ok(response.into_address())
}

/// Client for the ViaCEP lookup service.
#[derive(Clone)]
pub struct ViaCepClient {
    inner: Arc<ViaCepClientInner>,
}

struct ViaCepClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<Cep, Option<PostalAddress>>,
}

impl ViaCepClient {
    /// Create a new ViaCEP client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &CepLookupConfig) -> Result<Self, CepLookupError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(ViaCepClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                cache,
            }),
        })
    }

    /// Resolve a postal code to an address.
    ///
    /// Returns `Ok(None)` when ViaCEP doesn't know the code.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status or an
    /// unparsable body. Failures are not cached.
    #[instrument(skip(self), fields(cep = %cep))]
    pub async fn lookup(&self, cep: &Cep) -> Result<Option<PostalAddress>, CepLookupError> {
        if let Some(cached) = self.inner.cache.get(cep).await {
            debug!("Cache hit for postal code");
            return Ok(cached);
        }

        let url = format!("{}/{}/json/", self.inner.base_url, cep.digits());
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CepLookupError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let address = parse_response(&body)?;

        self.inner.cache.insert(cep.clone(), address.clone()).await;
        Ok(address)
    }
}
