//! In-memory store for the back-office.
//!
//! # Tables
//!
//! - `products` - Registered catalog products
//! - `highlights` - Home-screen banners
//! - `deliveries` - Orders on the delivery board
//! - `users` - App users (unique email)
//!
//! Data lives for the lifetime of the process. Repositories borrow the
//! [`Database`] the same way they would borrow a connection pool.

pub mod deliveries;
pub mod highlights;
pub mod products;
pub mod users;

use std::sync::atomic::AtomicU32;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{DeliveryOrder, Highlight, Product, User};

pub use deliveries::DeliveryRepository;
pub use highlights::HighlightRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("{0} not found")]
    NotFound(String),

    /// The change conflicts with stored state (e.g., unique email, status flow).
    #[error("{0}")]
    Conflict(String),
}

/// Backing tables.
#[derive(Debug, Default)]
pub struct Database {
    products: RwLock<Vec<Product>>,
    highlights: RwLock<Vec<Highlight>>,
    deliveries: RwLock<Vec<DeliveryOrder>>,
    users: RwLock<Vec<User>>,
    /// Last issued delivery number.
    delivery_seq: AtomicU32,
}

impl Database {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
