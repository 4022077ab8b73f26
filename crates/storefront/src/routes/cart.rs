//! Cart route handlers.
//!
//! Every mutation answers with the full cart so the app can re-render
//! without a second request. Lines are keyed by product id and delivery
//! method; updates and removals of unknown lines are silent no-ops.

use atadiesel_core::{Cart, CartItem, DeliveryMethod, ProductId, format_brl};
use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Cart line with display prices.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    #[serde(flatten)]
    pub item: CartItem,
    pub price_display: String,
    pub line_total: Decimal,
    pub line_total_display: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: i64,
    pub subtotal: Decimal,
    pub subtotal_display: String,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let line_total = item.line_total();
        Self {
            item: item.clone(),
            price_display: format_brl(item.unit_price),
            line_total,
            line_total_display: format_brl(line_total),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            line_count: cart.len(),
            item_count: cart.item_count(),
            subtotal,
            subtotal_display: format_brl(subtotal),
        }
    }
}

/// Identifies a cart line.
#[derive(Debug, Deserialize)]
pub struct LineKey {
    pub id: ProductId,
    pub delivery: DeliveryMethod,
}

/// Update quantity request.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub id: ProductId,
    pub delivery: DeliveryMethod,
    pub quantity: i64,
}

/// Cart count badge.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: i64,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let cart = state.cart().read().await;
    Json(CartView::from(&*cart))
}

/// Add an item, merging with an existing line for the same product and
/// delivery method.
#[instrument(skip(state, item), fields(product_id = %item.id, delivery = %item.delivery))]
pub async fn add(State(state): State<AppState>, Json(item): Json<CartItem>) -> Json<CartView> {
    add_breadcrumb("cart", "Added to cart", &[("product_id", item.id.as_str())]);

    let mut cart = state.cart().write().await;
    cart.add(item);
    Json(CartView::from(&*cart))
}

/// Overwrite a line's quantity.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartView> {
    let mut cart = state.cart().write().await;
    if !cart.update_quantity(&request.id, request.delivery, request.quantity) {
        tracing::debug!("No cart line to update");
    }
    Json(CartView::from(&*cart))
}

/// Add one unit to a line.
#[instrument(skip(state))]
pub async fn increment(State(state): State<AppState>, Json(key): Json<LineKey>) -> Json<CartView> {
    let mut cart = state.cart().write().await;
    cart.increment(&key.id, key.delivery);
    Json(CartView::from(&*cart))
}

/// Take one unit off a line, never going below one.
#[instrument(skip(state))]
pub async fn decrement(State(state): State<AppState>, Json(key): Json<LineKey>) -> Json<CartView> {
    let mut cart = state.cart().write().await;
    cart.decrement(&key.id, key.delivery);
    Json(CartView::from(&*cart))
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Json(key): Json<LineKey>) -> Json<CartView> {
    let mut cart = state.cart().write().await;
    cart.remove(&key.id, key.delivery);
    Json(CartView::from(&*cart))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut cart = state.cart().write().await;
    cart.clear();
    Json(CartView::from(&*cart))
}

/// Cart count badge: total units across lines.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    let count = state.cart().read().await.item_count();
    Json(CartCount { count })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, delivery: DeliveryMethod, cents: i64, quantity: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            title: format!("Produto {id}"),
            category: "Lubrificantes".to_string(),
            image: String::new(),
            unit_price: Decimal::new(cents, 2),
            quantity,
            delivery,
        }
    }

    #[test]
    fn test_cart_view_totals() {
        let mut cart = Cart::new();
        cart.add(item("1", DeliveryMethod::Home, 250, 2));
        cart.add(item("1", DeliveryMethod::StorePickup, 100_000, 1));

        let view = CartView::from(&cart);
        assert_eq!(view.line_count, 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, Decimal::new(100_500, 2));
        assert_eq!(view.subtotal_display, "R$ 1.005,00");
        assert_eq!(view.items[0].line_total_display, "R$ 5,00");
    }

    #[test]
    fn test_item_view_flattens_line() {
        let view = CartItemView::from(&item("7", DeliveryMethod::StorePickup, 1990, 1));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["delivery"], "loja");
        assert_eq!(json["price_display"], "R$ 19,90");
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from(&Cart::new());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal_display, "R$ 0,00");
    }
}
