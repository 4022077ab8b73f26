//! Placed orders and reviews.

use std::collections::HashMap;

use atadiesel_core::{
    CartItem, DeliveryMethod, OrderId, PaymentMethod, Quote, Review, ReviewError, Tracking,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Prefix of every order id.
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Random characters after the prefix.
pub const ORDER_ID_SUFFIX_LEN: usize = 9;

/// Errors raised by order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderId),
    #[error("order {0} has not been delivered yet")]
    NotFinished(OrderId),
    #[error("order {0} was already reviewed")]
    AlreadyReviewed(OrderId),
    #[error(transparent)]
    InvalidReview(#[from] ReviewError),
}

/// Generate an order id such as `ORD-7Q2ZK81XA`.
#[must_use]
pub fn generate_order_id() -> OrderId {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    let suffix: String = (0..ORDER_ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET.get(idx).map_or('0', |b| char::from(*b))
        })
        .collect();
    OrderId::new(format!("{ORDER_ID_PREFIX}{suffix}"))
}

/// An order as recorded at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub method: DeliveryMethod,
    pub payment: PaymentMethod,
    pub payment_label: String,
    pub items: Vec<CartItem>,
    pub quote: Quote,
    pub points_earned: u32,
    pub review: Option<Review>,
}

impl PlacedOrder {
    /// Tracking timeline at `now`.
    #[must_use]
    pub fn tracking(&self, now: DateTime<Utc>) -> Tracking {
        Tracking::at(self.method, self.placed_at, now)
    }
}

/// In-memory record of placed orders.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: HashMap<OrderId, PlacedOrder>,
}

impl OrderBook {
    /// Record a placed order.
    pub fn insert(&mut self, order: PlacedOrder) {
        self.orders.insert(order.id.clone(), order);
    }

    /// Look up an order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for unknown ids.
    pub fn get(&self, id: &OrderId) -> Result<&PlacedOrder, OrderError> {
        self.orders
            .get(id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))
    }

    /// Attach a review to a finished order.
    ///
    /// # Errors
    ///
    /// Fails for unknown orders, invalid ratings, orders whose timeline has
    /// not finished at `now`, and orders that already carry a review.
    pub fn review(
        &mut self,
        id: &OrderId,
        review: Review,
        now: DateTime<Utc>,
    ) -> Result<&PlacedOrder, OrderError> {
        review.validate()?;

        let order = self
            .orders
            .get_mut(id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        if !order.tracking(now).finished {
            return Err(OrderError::NotFinished(id.clone()));
        }
        if order.review.is_some() {
            return Err(OrderError::AlreadyReviewed(id.clone()));
        }

        order.review = Some(review);
        Ok(order)
    }

    /// Orders newest first.
    #[must_use]
    pub fn newest_first(&self) -> Vec<&PlacedOrder> {
        let mut orders: Vec<&PlacedOrder> = self.orders.values().collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at).then_with(|| a.id.cmp(&b.id)));
        orders
    }

    /// Number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order was placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
