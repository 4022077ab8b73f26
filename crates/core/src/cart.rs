//! In-memory shopping cart.
//!
//! A cart is an ordered list of line items. A line is identified by the
//! product ID *and* the delivery method, so the same product can sit in the
//! cart twice: once for home delivery and once for store pickup.
//!
//! Every operation is total. Updating or removing a line that isn't there is
//! a silent no-op, and quantities are stored exactly as given (no clamping,
//! zero and negative values pass through). Callers that want a floor of one
//! apply it themselves, see [`Cart::decrement`].
//!
//! Quantity and money arithmetic saturates instead of overflowing, so an
//! absurd line can never make the cart unreadable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{DeliveryMethod, ProductId};

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    pub delivery: DeliveryMethod,
}

impl CartItem {
    /// Whether this line is keyed by `(id, delivery)`.
    #[must_use]
    pub fn matches(&self, id: &ProductId, delivery: DeliveryMethod) -> bool {
        self.id == *id && self.delivery == delivery
    }

    /// `unit_price × quantity`, clamped to the decimal range.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Ordered collection of [`CartItem`]s with merge-on-add semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a line, merging into an existing `(id, delivery)` line.
    ///
    /// When a matching line exists its quantity grows by the incoming
    /// quantity and the rest of the incoming item is discarded. Otherwise the
    /// item is appended.
    pub fn add(&mut self, item: CartItem) {
        match self.position(&item.id, item.delivery) {
            Some(idx) => {
                if let Some(line) = self.items.get_mut(idx) {
                    line.quantity = line.quantity.saturating_add(item.quantity);
                }
            }
            None => self.items.push(item),
        }
    }

    /// Overwrite the quantity of a line. Returns whether a line matched.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        delivery: DeliveryMethod,
        quantity: i64,
    ) -> bool {
        match self.items.iter_mut().find(|line| line.matches(id, delivery)) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Increase a line's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, id: &ProductId, delivery: DeliveryMethod) -> Option<i64> {
        let line = self.items.iter_mut().find(|line| line.matches(id, delivery))?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Decrease a line's quantity by one without going below one.
    pub fn decrement(&mut self, id: &ProductId, delivery: DeliveryMethod) -> Option<i64> {
        let line = self.items.iter_mut().find(|line| line.matches(id, delivery))?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Some(line.quantity)
    }

    /// Remove a line. Returns the removed line, if any.
    pub fn remove(&mut self, id: &ProductId, delivery: DeliveryMethod) -> Option<CartItem> {
        let idx = self.position(id, delivery)?;
        Some(self.items.remove(idx))
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    ///
    /// This is a shared borrow: lines can only change through the cart's
    /// own operations.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a single line.
    #[must_use]
    pub fn get(&self, id: &ProductId, delivery: DeliveryMethod) -> Option<&CartItem> {
        self.items.iter().find(|line| line.matches(id, delivery))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.line_total()))
    }

    fn position(&self, id: &ProductId, delivery: DeliveryMethod) -> Option<usize> {
        self.items.iter().position(|line| line.matches(id, delivery))
    }
}
