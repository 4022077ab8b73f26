//! Checkout pricing and payment methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{Cep, DeliveryMethod, format_brl};

/// Pricing knobs for a quote. Loaded from configuration by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRules {
    /// Flat freight charged for home delivery once a postal code is known.
    pub home_delivery_fee: Decimal,
    /// Amount taken off when the customer spends loyalty points.
    pub points_discount: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            home_delivery_fee: Decimal::new(1144, 2),
            points_discount: Decimal::new(500, 2),
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Pix,
    /// Cash on delivery or at the counter.
    Money,
    CreditCard {
        #[serde(alias = "number")]
        last4: String,
    },
    DebitCard {
        #[serde(alias = "number")]
        last4: String,
    },
}

impl PaymentMethod {
    /// Build a card method from a typed card number, keeping the last four digits.
    #[must_use]
    pub fn card(number: &str, credit: bool) -> Self {
        let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
        let last4: String = digits.iter().skip(digits.len().saturating_sub(4)).collect();
        if credit {
            Self::CreditCard { last4 }
        } else {
            Self::DebitCard { last4 }
        }
    }

    /// Reduce a card method to its last four digits.
    ///
    /// Clients may send the typed card number in place of `last4`; only the
    /// tail is ever kept.
    #[must_use]
    pub fn masked(self) -> Self {
        match self {
            Self::CreditCard { last4 } => Self::card(&last4, true),
            Self::DebitCard { last4 } => Self::card(&last4, false),
            other => other,
        }
    }

    /// Display label, e.g. `Cartão de Crédito ****1234`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Pix => "PIX".to_string(),
            Self::Money => "Dinheiro".to_string(),
            Self::CreditCard { last4 } => format!("Cartão de Crédito ****{last4}"),
            Self::DebitCard { last4 } => format!("Cartão de Débito ****{last4}"),
        }
    }
}

/// What the customer chose on the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSelection {
    pub method: DeliveryMethod,
    #[serde(default)]
    pub cep: Option<Cep>,
    #[serde(default)]
    pub payment: PaymentMethod,
    #[serde(default)]
    pub use_points: bool,
}

/// Price breakdown for a cart under a checkout selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub item_count: i64,
    pub subtotal: Decimal,
    /// `None` until freight applies (home delivery with a postal code).
    pub freight: Option<Decimal>,
    pub points_discount: Decimal,
    pub total: Decimal,
    pub total_display: String,
}

impl Quote {
    /// Price `cart` under `selection`.
    ///
    /// The total never goes below zero, even when the points discount is
    /// larger than the rest of the order.
    #[must_use]
    pub fn compute(cart: &Cart, selection: &CheckoutSelection, rules: &PricingRules) -> Self {
        let subtotal = cart.subtotal();
        let freight = (selection.method == DeliveryMethod::Home && selection.cep.is_some())
            .then_some(rules.home_delivery_fee);
        let points_discount = if selection.use_points {
            rules.points_discount
        } else {
            Decimal::ZERO
        };
        let total = subtotal
            .saturating_add(freight.unwrap_or(Decimal::ZERO))
            .saturating_sub(points_discount)
            .max(Decimal::ZERO);

        Self {
            item_count: cart.item_count(),
            subtotal,
            freight,
            points_discount,
            total,
            total_display: format_brl(total),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::types::ProductId;

    fn cart_with(total_cents: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem {
            id: ProductId::new("1"),
            title: "Filtro de Óleo".to_string(),
            category: String::new(),
            image: String::new(),
            unit_price: Decimal::new(total_cents, 2),
            quantity: 1,
            delivery: DeliveryMethod::Home,
        });
        cart
    }

    fn selection(method: DeliveryMethod, cep: Option<&str>, use_points: bool) -> CheckoutSelection {
        CheckoutSelection {
            method,
            cep: cep.map(|c| Cep::parse(c).unwrap()),
            payment: PaymentMethod::Pix,
            use_points,
        }
    }

    #[test]
    fn test_store_pickup_has_no_freight() {
        let quote = Quote::compute(
            &cart_with(5000),
            &selection(DeliveryMethod::StorePickup, Some("01000-000"), false),
            &PricingRules::default(),
        );
        assert_eq!(quote.freight, None);
        assert_eq!(quote.total, Decimal::new(5000, 2));
    }

    #[test]
    fn test_home_delivery_needs_cep_for_freight() {
        let rules = PricingRules::default();
        let without = Quote::compute(&cart_with(5000), &selection(DeliveryMethod::Home, None, false), &rules);
        assert_eq!(without.freight, None);

        let with = Quote::compute(
            &cart_with(5000),
            &selection(DeliveryMethod::Home, Some("01000000"), false),
            &rules,
        );
        assert_eq!(with.freight, Some(Decimal::new(1144, 2)));
        assert_eq!(with.total, Decimal::new(6144, 2));
        assert_eq!(with.total_display, "R$ 61,44");
    }

    #[test]
    fn test_points_discount_floors_total_at_zero() {
        let quote = Quote::compute(
            &cart_with(300),
            &selection(DeliveryMethod::StorePickup, None, true),
            &PricingRules::default(),
        );
        assert_eq!(quote.points_discount, Decimal::new(500, 2));
        assert_eq!(quote.total, Decimal::ZERO);
    }

    #[test]
    fn test_empty_cart_quote() {
        let quote = Quote::compute(
            &Cart::new(),
            &selection(DeliveryMethod::StorePickup, None, false),
            &PricingRules::default(),
        );
        assert_eq!(quote.item_count, 0);
        assert_eq!(quote.total_display, "R$ 0,00");
    }

    #[test]
    fn test_card_label_keeps_last_four() {
        let card = PaymentMethod::card("5555 4444 3333 1234", true);
        assert_eq!(card.label(), "Cartão de Crédito ****1234");
        assert_eq!(PaymentMethod::card("12", false).label(), "Cartão de Débito ****12");
    }

    #[test]
    fn test_masked_card_keeps_only_last_four() {
        let typed: PaymentMethod =
            serde_json::from_str(r#"{"type":"credit_card","number":"5555 4444 3333 1234"}"#).unwrap();
        assert_eq!(
            typed.masked(),
            PaymentMethod::CreditCard {
                last4: "1234".to_string()
            }
        );
        assert_eq!(PaymentMethod::Money.masked(), PaymentMethod::Money);
    }

    #[test]
    fn test_huge_subtotal_quote_saturates() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            id: ProductId::new("1"),
            title: "Motor".to_string(),
            category: String::new(),
            image: String::new(),
            unit_price: Decimal::MAX,
            quantity: 3,
            delivery: DeliveryMethod::Home,
        });
        let quote = Quote::compute(
            &cart,
            &selection(DeliveryMethod::Home, Some("01000000"), true),
            &PricingRules::default(),
        );
        assert_eq!(quote.subtotal, Decimal::MAX);
        assert!(quote.total > Decimal::ZERO);
    }

    #[test]
    fn test_payment_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::DebitCard {
            last4: "5678".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"debit_card","last4":"5678"}"#);
        let pix: PaymentMethod = serde_json::from_str(r#"{"type":"pix"}"#).unwrap();
        assert_eq!(pix, PaymentMethod::Pix);
    }
}
