//! Application state shared across handlers.

use std::sync::Arc;

use atadiesel_core::{Address, Cart, LoyaltyAccount, Visit};
use tokio::sync::RwLock;

use crate::config::StorefrontConfig;
use crate::services::{CepLookupError, OrderBook, ViaCepClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The storefront serves a single
/// shopper, so the cart, orders, points, visit and address book live here in
/// memory. When a handler needs several of them it locks in field order:
/// cart, orders, visit, loyalty, addresses.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cep: ViaCepClient,
    cart: RwLock<Cart>,
    orders: RwLock<OrderBook>,
    loyalty: RwLock<LoyaltyAccount>,
    visit: RwLock<Visit>,
    addresses: RwLock<Vec<Address>>,
}

impl AppState {
    /// Create a new application state with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the ViaCEP HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CepLookupError> {
        let cep = ViaCepClient::new(&config.cep)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                cep,
                cart: RwLock::new(Cart::new()),
                orders: RwLock::new(OrderBook::default()),
                loyalty: RwLock::new(LoyaltyAccount::default()),
                visit: RwLock::new(Visit::default()),
                addresses: RwLock::new(Vec::new()),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the ViaCEP client.
    #[must_use]
    pub fn cep(&self) -> &ViaCepClient {
        &self.inner.cep
    }

    /// The shopper's cart.
    #[must_use]
    pub fn cart(&self) -> &RwLock<Cart> {
        &self.inner.cart
    }

    /// Orders placed through checkout.
    #[must_use]
    pub fn orders(&self) -> &RwLock<OrderBook> {
        &self.inner.orders
    }

    /// The shopper's loyalty points.
    #[must_use]
    pub fn loyalty(&self) -> &RwLock<LoyaltyAccount> {
        &self.inner.loyalty
    }

    /// Current autonomous-store visit.
    #[must_use]
    pub fn visit(&self) -> &RwLock<Visit> {
        &self.inner.visit
    }

    /// Saved delivery addresses.
    #[must_use]
    pub fn addresses(&self) -> &RwLock<Vec<Address>> {
        &self.inner.addresses
    }
}
