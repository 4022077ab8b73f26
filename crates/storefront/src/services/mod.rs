//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cep` - ViaCEP postal code lookups (cached)
//! - `orders` - Placed orders, tracking and reviews

pub mod cep;
pub mod orders;

pub use cep::{CepLookupError, PostalAddress, ViaCepClient};
pub use orders::{OrderBook, OrderError, PlacedOrder, generate_order_id};
