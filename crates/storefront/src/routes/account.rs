//! Account route handlers: the saved address book.

use atadiesel_core::{Address, AddressForm, AddressId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Address with its one-line rendering.
#[derive(Debug, Serialize)]
pub struct AddressView {
    #[serde(flatten)]
    pub address: Address,
    pub display: String,
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            display: address.display_line(),
            address: address.clone(),
        }
    }
}

/// List saved addresses.
///
/// GET /account/addresses
#[instrument(skip(state))]
pub async fn addresses(State(state): State<AppState>) -> Json<Vec<AddressView>> {
    let addresses = state.addresses().read().await;
    Json(addresses.iter().map(AddressView::from).collect())
}

/// Save a new address.
///
/// POST /account/addresses
///
/// # Errors
///
/// Returns 400 if street or number is missing.
#[instrument(skip(state, form))]
pub async fn create_address(
    State(state): State<AppState>,
    Json(form): Json<AddressForm>,
) -> Result<(StatusCode, Json<AddressView>)> {
    let address = form.into_address(AddressId::new(Uuid::new_v4().to_string()))?;
    let view = AddressView::from(&address);

    state.addresses().write().await.push(address);
    tracing::info!(address_id = %view.address.id, "Address saved");

    Ok((StatusCode::CREATED, Json(view)))
}

/// Delete a saved address.
///
/// DELETE /account/addresses/{id}
///
/// # Errors
///
/// Returns 404 for unknown ids.
#[instrument(skip(state))]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<StatusCode> {
    let mut addresses = state.addresses().write().await;
    let before = addresses.len();
    addresses.retain(|address| address.id != id);

    if addresses.len() == before {
        return Err(AppError::NotFound(format!("address {id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}
