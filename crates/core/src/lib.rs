//! Atadiesel Core - Shared domain library.
//!
//! This crate provides the types and rules used by both Atadiesel services:
//! - `storefront` - Customer-facing API behind the mobile app
//! - `admin` - Back-office API for products, deliveries and users
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no clocks. Anything time-dependent takes `now` as an argument.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, postal codes, emails and statuses
//! - [`cart`] - The shopping cart keyed by product and delivery method
//! - [`checkout`] - Quotes and payment methods
//! - [`tracking`] - Order timeline and reviews
//! - [`loyalty`] - Points, tiers and rewards
//! - [`autonomous`] - Autonomous store visit state machine
//! - [`address`] - Saved addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod autonomous;
pub mod cart;
pub mod checkout;
pub mod loyalty;
pub mod tracking;
pub mod types;

pub use address::{Address, AddressError, AddressForm};
pub use autonomous::{Mmss, Visit, VisitError, VisitStatus, VisitSummary};
pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutSelection, PaymentMethod, PricingRules, Quote};
pub use loyalty::{LoyaltyAccount, LoyaltyError, LoyaltySummary, LoyaltyTier, REWARDS, Reward};
pub use tracking::{Review, ReviewError, Tracking};
pub use types::*;
