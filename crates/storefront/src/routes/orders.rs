//! Order history, tracking and reviews.

use atadiesel_core::{DeliveryMethod, OrderId, Review, Tracking};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::services::PlacedOrder;
use crate::state::AppState;

/// Row of the order history.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub method: DeliveryMethod,
    pub item_count: i64,
    pub total_display: String,
    pub status: String,
    pub reviewed: bool,
}

impl OrderSummary {
    fn new(order: &PlacedOrder, now: DateTime<Utc>) -> Self {
        Self {
            id: order.id.clone(),
            placed_at: order.placed_at,
            method: order.method,
            item_count: order.quote.item_count,
            total_display: order.quote.total_display.clone(),
            status: order.tracking(now).current_label,
            reviewed: order.review.is_some(),
        }
    }
}

/// Tracking screen payload.
#[derive(Debug, Serialize)]
pub struct TrackingResponse {
    pub order_id: OrderId,
    pub tracking: Tracking,
    pub review: Option<Review>,
}

/// List placed orders, newest first.
///
/// GET /orders
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<OrderSummary>> {
    let now = Utc::now();
    let orders = state.orders().read().await;
    Json(
        orders
            .newest_first()
            .into_iter()
            .map(|order| OrderSummary::new(order, now))
            .collect(),
    )
}

/// Current tracking timeline of an order.
///
/// GET /orders/{id}/tracking
///
/// # Errors
///
/// Returns 404 for unknown orders.
#[instrument(skip(state))]
pub async fn tracking(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<TrackingResponse>> {
    let orders = state.orders().read().await;
    let order = orders.get(&id)?;

    Ok(Json(TrackingResponse {
        order_id: order.id.clone(),
        tracking: order.tracking(Utc::now()),
        review: order.review.clone(),
    }))
}

/// Rate a delivered order.
///
/// POST /orders/{id}/review
///
/// # Errors
///
/// Returns 404 for unknown orders, 400 for ratings outside 1..=5 and 409 if
/// the order isn't finished yet or was already reviewed.
#[instrument(skip(state))]
pub async fn review(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(review): Json<Review>,
) -> Result<Json<TrackingResponse>> {
    let now = Utc::now();
    let mut orders = state.orders().write().await;
    let order = orders.review(&id, review, now)?;

    tracing::info!(order_id = %order.id, "Order reviewed");

    Ok(Json(TrackingResponse {
        order_id: order.id.clone(),
        tracking: order.tracking(now),
        review: order.review.clone(),
    }))
}
