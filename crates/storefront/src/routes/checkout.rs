//! Checkout route handlers.

use atadiesel_core::{CheckoutSelection, OrderId, Quote, Tracking};
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::{PlacedOrder, generate_order_id};
use crate::state::AppState;

/// Response after placing an order.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub order_id: OrderId,
    pub quote: Quote,
    pub payment_label: String,
    pub points_earned: u32,
    pub tracking: Tracking,
}

/// Price the current cart.
///
/// POST /checkout/quote
#[instrument(skip(state))]
pub async fn quote(
    State(state): State<AppState>,
    Json(selection): Json<CheckoutSelection>,
) -> Json<Quote> {
    let cart = state.cart().read().await;
    Json(Quote::compute(&cart, &selection, &state.config().pricing))
}

/// Place an order for the current cart.
///
/// POST /checkout
///
/// Records the order, credits loyalty points for the total and empties the
/// cart.
///
/// # Errors
///
/// Returns 400 if the cart is empty.
#[instrument(skip(state))]
pub async fn place_order(
    State(state): State<AppState>,
    Json(selection): Json<CheckoutSelection>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>)> {
    let mut cart = state.cart().write().await;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let mut orders = state.orders().write().await;
    let quote = Quote::compute(&cart, &selection, &state.config().pricing);
    let points_earned = state.loyalty().write().await.earn_purchase(quote.total);

    let payment = selection.payment.masked();
    let now = Utc::now();
    let order = PlacedOrder {
        id: generate_order_id(),
        placed_at: now,
        method: selection.method,
        payment_label: payment.label(),
        payment,
        items: cart.items().to_vec(),
        quote,
        points_earned,
        review: None,
    };
    cart.clear();

    add_breadcrumb("checkout", "Order placed", &[("order_id", order.id.as_str())]);
    tracing::info!(
        order_id = %order.id,
        total = %order.quote.total,
        points_earned,
        "Order placed"
    );

    let response = PlaceOrderResponse {
        order_id: order.id.clone(),
        quote: order.quote.clone(),
        payment_label: order.payment_label.clone(),
        points_earned,
        tracking: order.tracking(now),
    };
    orders.insert(order);

    Ok((StatusCode::CREATED, Json(response)))
}
