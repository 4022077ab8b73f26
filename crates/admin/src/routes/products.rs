//! Product registration.

use atadiesel_core::ProductId;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::{Product, ProductForm};
use crate::state::AppState;

/// Product with its formatted selling price.
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub selling_price_display: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            selling_price_display: product.selling_price_display(),
            product,
        }
    }
}

/// List registered products.
///
/// GET /products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    let products = ProductRepository::new(state.db()).list_all().await;
    Json(products.into_iter().map(ProductView::from).collect())
}

/// Register a product.
///
/// POST /products
///
/// # Errors
///
/// Returns 400 if the name is missing.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<ProductView>)> {
    let product = form.into_product(ProductId::new(Uuid::new_v4().to_string()), Utc::now())?;
    let product = ProductRepository::new(state.db()).create(product).await;

    tracing::info!(
        product_id = %product.id,
        discount_percent = product.discount_percent,
        "Product registered"
    );

    Ok((StatusCode::CREATED, Json(product.into())))
}
