//! Delivery board.
//!
//! Operators walk an order from new to out-for-delivery; only the customer's
//! confirmation moves it on to delivered.

use atadiesel_core::OrderId;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::DeliveryRepository;
use crate::error::Result;
use crate::models::{DeliveryForm, DeliveryOrder, DeliveryTab};
use crate::state::AppState;

/// Board card.
#[derive(Debug, Serialize)]
pub struct DeliveryView {
    #[serde(flatten)]
    pub order: DeliveryOrder,
    pub status_label: &'static str,
    /// Label of the button that advances the order, if any.
    pub action_label: Option<&'static str>,
    pub items_summary: String,
    pub total_display: String,
}

impl From<DeliveryOrder> for DeliveryView {
    fn from(order: DeliveryOrder) -> Self {
        Self {
            status_label: order.status.label(),
            action_label: order.status.action_label(),
            items_summary: order.items_summary(),
            total_display: order.total_display(),
            order,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub tab: DeliveryTab,
}

/// Orders under the requested tab, newest first.
///
/// GET /deliveries?tab=active|history
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Json<Vec<DeliveryView>> {
    let orders = DeliveryRepository::new(state.db()).list_tab(query.tab).await;
    Json(orders.into_iter().map(DeliveryView::from).collect())
}

/// Put a new order on the board.
///
/// POST /deliveries
///
/// # Errors
///
/// Returns 400 for a blank customer or address, missing items or a total
/// out of range.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<DeliveryForm>,
) -> Result<(StatusCode, Json<DeliveryView>)> {
    let repo = DeliveryRepository::new(state.db());
    let order = form.into_order(|| repo.next_id(), Utc::now())?;
    let order = repo.create(order).await;

    tracing::info!(order_id = %order.id, total = %order.total, "Delivery order received");

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Advance an order one step.
///
/// POST /deliveries/{id}/advance
///
/// # Errors
///
/// Returns 404 for unknown orders and 409 once the order is out for
/// delivery or finished.
#[instrument(skip(state))]
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<DeliveryView>> {
    let order = DeliveryRepository::new(state.db()).advance(&id).await?;
    tracing::info!(order_id = %order.id, status = ?order.status, "Delivery advanced");
    Ok(Json(order.into()))
}

/// Customer confirmed receipt.
///
/// POST /deliveries/{id}/confirm
///
/// # Errors
///
/// Returns 404 for unknown orders and 409 unless the order is out for
/// delivery.
#[instrument(skip(state))]
pub async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<DeliveryView>> {
    let order = DeliveryRepository::new(state.db()).confirm(&id).await?;
    tracing::info!(order_id = %order.id, "Delivery confirmed by customer");
    Ok(Json(order.into()))
}
