//! Catalog product registered from the back-office.

use atadiesel_core::{ProductId, discount_percent, format_brl, parse_brl_or_zero};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for the product form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("product name is required")]
    MissingName,
}

/// A registered product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_current: Decimal,
    pub price_promo: Option<Decimal>,
    /// Whole-number discount of the promo price over the current one.
    pub discount_percent: u32,
    pub stock: u32,
    pub sku: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price the customer pays: the promo price when one is set.
    #[must_use]
    pub fn selling_price(&self) -> Decimal {
        match self.price_promo {
            Some(promo) if self.discount_percent > 0 => promo,
            _ => self.price_current,
        }
    }

    #[must_use]
    pub fn selling_price_display(&self) -> String {
        format_brl(self.selling_price())
    }
}

/// Registration form as typed by the operator.
///
/// Prices arrive as text such as `"R$ 1.234,56"` or `"49,90"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price_current: String,
    pub price_promo: String,
    pub category: String,
    pub stock: String,
    pub sku: String,
    pub image: String,
}

impl ProductForm {
    /// Validate the form and build the product.
    ///
    /// Unparsable prices become zero and an unparsable stock becomes zero.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::MissingName`] if the name is blank.
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Result<Product, ProductError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductError::MissingName);
        }

        let price_current = parse_brl_or_zero(&self.price_current);
        let price_promo =
            (!self.price_promo.trim().is_empty()).then(|| parse_brl_or_zero(&self.price_promo));
        let discount = price_promo.map_or(0, |promo| discount_percent(price_current, promo));
        let image = self.image.trim();

        Ok(Product {
            id,
            name: name.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            price_current,
            price_promo,
            discount_percent: discount,
            stock: self.stock.trim().parse().unwrap_or(0),
            sku: self.sku.trim().to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
            created_at: now,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(current: &str, promo: &str) -> ProductForm {
        ProductForm {
            name: "Óleo Motor 5W30".to_string(),
            price_current: current.to_string(),
            price_promo: promo.to_string(),
            stock: "12".to_string(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_brl_prices_and_discount() {
        let product = form("R$ 50,00", "R$ 40,00")
            .into_product(ProductId::new("p1"), Utc::now())
            .unwrap();
        assert_eq!(product.price_current, Decimal::new(50, 0));
        assert_eq!(product.price_promo, Some(Decimal::new(40, 0)));
        assert_eq!(product.discount_percent, 20);
        assert_eq!(product.stock, 12);
        assert_eq!(product.selling_price(), Decimal::new(40, 0));
    }

    #[test]
    fn test_unparsable_prices_fall_back_to_zero() {
        let product = form("caro", "")
            .into_product(ProductId::new("p1"), Utc::now())
            .unwrap();
        assert_eq!(product.price_current, Decimal::ZERO);
        assert_eq!(product.price_promo, None);
        assert_eq!(product.discount_percent, 0);
    }

    #[test]
    fn test_promo_above_current_has_no_discount() {
        let product = form("10", "12")
            .into_product(ProductId::new("p1"), Utc::now())
            .unwrap();
        assert_eq!(product.discount_percent, 0);
        assert_eq!(product.selling_price(), Decimal::new(10, 0));
    }

    #[test]
    fn test_name_required() {
        let mut blank = form("10", "");
        blank.name = "   ".to_string();
        assert_eq!(
            blank.into_product(ProductId::new("p1"), Utc::now()).unwrap_err(),
            ProductError::MissingName
        );
    }

    #[test]
    fn test_bad_stock_is_zero() {
        let mut f = form("10", "");
        f.stock = "dez".to_string();
        let product = f.into_product(ProductId::new("p1"), Utc::now()).unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.image, None);
    }
}
