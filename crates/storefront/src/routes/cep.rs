//! Postal code lookup.
//!
//! Unknown codes and lookup failures both answer `found: false` with every
//! address field cleared, so the app can blank its form either way. Only a
//! malformed code is a client error.

use atadiesel_core::Cep;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::services::PostalAddress;
use crate::state::AppState;

/// Lookup result.
#[derive(Debug, Serialize)]
pub struct CepLookupResponse {
    pub cep: Cep,
    pub found: bool,
    pub address: PostalAddress,
}

/// Resolve a postal code.
///
/// GET /api/cep/{cep}
///
/// # Errors
///
/// Returns 400 if the code doesn't have eight digits.
#[instrument(skip(state))]
pub async fn lookup(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<CepLookupResponse>> {
    let cep = Cep::parse(&raw)?;

    let address = match state.cep().lookup(&cep).await {
        Ok(address) => address,
        Err(e) => {
            tracing::warn!(cep = %cep, error = %e, "Postal code lookup failed");
            None
        }
    };

    Ok(Json(CepLookupResponse {
        cep,
        found: address.is_some(),
        address: address.unwrap_or_default(),
    }))
}
