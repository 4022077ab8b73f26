//! Orders on the delivery board.

use atadiesel_core::{OrderId, OrderStatus, format_brl};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("customer is required")]
    MissingCustomer,
    #[error("delivery address is required")]
    MissingAddress,
    #[error("order must have at least one item")]
    NoItems,
    #[error("item {0} must have a positive quantity")]
    InvalidQuantity(String),
    #[error("order total is out of range")]
    TotalOutOfRange,
}

/// One product line of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl DeliveryLine {
    /// `unit_price × quantity`, clamped to the decimal range.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// An order as the store operator sees it.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryOrder {
    pub id: OrderId,
    pub customer: String,
    pub address: String,
    pub items: Vec<DeliveryLine>,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_method: String,
}

impl DeliveryOrder {
    /// Items as a single line, e.g. `2x Óleo Motor 5W30, 1x Filtro de Ar`.
    #[must_use]
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|line| format!("{}x {}", line.quantity, line.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn total_display(&self) -> String {
        format_brl(self.total)
    }
}

/// Board tab an order is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTab {
    #[default]
    Active,
    History,
}

impl DeliveryTab {
    #[must_use]
    pub const fn includes(self, status: OrderStatus) -> bool {
        match self {
            Self::Active => status.is_active(),
            Self::History => !status.is_active(),
        }
    }
}

/// New order pushed onto the board.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryForm {
    pub customer: String,
    pub address: String,
    pub items: Vec<DeliveryLine>,
    #[serde(default)]
    pub payment_method: String,
    /// Defaults to the time the order is received.
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
}

impl DeliveryForm {
    /// Validate the form and build a pending order with its total.
    ///
    /// `next_id` is only called once the form is valid, so rejected forms
    /// never consume an order number.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] for a blank customer or address, no items,
    /// an item with zero quantity, or a total too large to represent.
    pub fn into_order(
        self,
        next_id: impl FnOnce() -> OrderId,
        now: DateTime<Utc>,
    ) -> Result<DeliveryOrder, DeliveryError> {
        let customer = self.customer.trim();
        if customer.is_empty() {
            return Err(DeliveryError::MissingCustomer);
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(DeliveryError::MissingAddress);
        }
        if self.items.is_empty() {
            return Err(DeliveryError::NoItems);
        }
        if let Some(line) = self.items.iter().find(|line| line.quantity == 0) {
            return Err(DeliveryError::InvalidQuantity(line.name.clone()));
        }

        let total = self
            .items
            .iter()
            .try_fold(Decimal::ZERO, |total, line| {
                line.checked_line_total()
                    .and_then(|line_total| total.checked_add(line_total))
            })
            .ok_or(DeliveryError::TotalOutOfRange)?;

        Ok(DeliveryOrder {
            id: next_id(),
            customer: customer.to_string(),
            address: address.to_string(),
            items: self.items,
            total,
            placed_at: self.placed_at.unwrap_or(now),
            status: OrderStatus::Pending,
            payment_method: self.payment_method.trim().to_string(),
        })
    }
}
