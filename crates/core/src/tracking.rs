//! Order tracking timeline.
//!
//! There is no courier integration. Progress is derived from the time since
//! the order was placed: the timeline opens on its second step and moves one
//! step forward every [`STEP_INTERVAL_SECS`] seconds until it reaches the
//! last one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::DeliveryMethod;

/// Seconds between two simulated status updates.
pub const STEP_INTERVAL_SECS: i64 = 5;

/// Index of the step a freshly placed order shows.
const INITIAL_STEP: usize = 1;

/// Timeline for home delivery.
pub const HOME_DELIVERY_STEPS: [&str; 4] = [
    "Preparando pedido",
    "Pronto para entrega",
    "Saiu para entrega",
    "Entregue",
];

/// Timeline for store pickup.
pub const STORE_PICKUP_STEPS: [&str; 4] = [
    "Pedido aceito",
    "Preparando pedido",
    "Pedido pronto",
    "Retirada do pedido",
];

/// Snapshot of an order's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    pub method: DeliveryMethod,
    pub steps: Vec<String>,
    pub current_step: usize,
    pub current_label: String,
    pub finished: bool,
}

impl Tracking {
    /// Timeline of an order placed at `placed_at`, as seen at `now`.
    #[must_use]
    pub fn at(method: DeliveryMethod, placed_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let steps = match method {
            DeliveryMethod::Home => HOME_DELIVERY_STEPS,
            DeliveryMethod::StorePickup => STORE_PICKUP_STEPS,
        };
        let last = steps.len() - 1;

        let elapsed = (now - placed_at).num_seconds().max(0);
        let advanced = usize::try_from(elapsed / STEP_INTERVAL_SECS).unwrap_or(usize::MAX);
        let current_step = INITIAL_STEP.saturating_add(advanced).min(last);

        Self {
            method,
            current_label: steps.get(current_step).copied().unwrap_or_default().to_string(),
            steps: steps.iter().map(ToString::to_string).collect(),
            current_step,
            finished: current_step == last,
        }
    }
}

/// Errors raised when validating a review.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("rating must be between {min} and {max} (got {got})")]
    RatingOutOfRange { min: u8, max: u8, got: u8 },
}

/// Customer review left once an order is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl Review {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// Check the star rating range.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::RatingOutOfRange`] for ratings outside 1..=5.
    pub const fn validate(&self) -> Result<(), ReviewError> {
        if self.rating < Self::MIN_RATING || self.rating > Self::MAX_RATING {
            return Err(ReviewError::RatingOutOfRange {
                min: Self::MIN_RATING,
                max: Self::MAX_RATING,
                got: self.rating,
            });
        }
        Ok(())
    }
}
