//! Core value types for Atadiesel.
//!
//! Type-safe wrappers for identifiers, BRL amounts, postal codes, emails and
//! the status enums shared across services.

pub mod cep;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use cep::{Cep, CepError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{
    PriceParseError, discount_percent, format_brl, format_brl_compact, parse_brl,
    parse_brl_or_zero,
};
pub use status::*;
