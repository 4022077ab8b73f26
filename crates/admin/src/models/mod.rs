//! Domain models for admin.
//!
//! Each model comes with the form it is created from; forms validate and
//! normalize operator input before anything reaches the store.

pub mod delivery;
pub mod highlight;
pub mod product;
pub mod user;

pub use delivery::{DeliveryError, DeliveryForm, DeliveryLine, DeliveryOrder, DeliveryTab};
pub use highlight::{Highlight, HighlightError, HighlightForm};
pub use product::{Product, ProductError, ProductForm};
pub use user::{User, UserError, UserForm};
