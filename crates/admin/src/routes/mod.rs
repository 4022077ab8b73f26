//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//! GET  /dashboard                      - Totals, top products, revenue chart
//!
//! # Catalog
//! GET  /products                       - Registered products
//! POST /products                       - Register a product
//! GET  /highlights                     - Home-screen highlights
//! POST /highlights                     - Publish a highlight
//!
//! # Delivery board
//! GET  /deliveries                     - Orders by tab (active, history)
//! POST /deliveries                     - New order
//! POST /deliveries/{id}/advance        - Next operator status
//! POST /deliveries/{id}/confirm        - Customer confirmed receipt
//!
//! # Users
//! GET    /users                        - User list
//! POST   /users                        - Create user
//! PUT    /users/{id}                   - Replace user details
//! DELETE /users/{id}                   - Delete user
//! ```

pub mod dashboard;
pub mod deliveries;
pub mod highlights;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the delivery board routes router.
pub fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(deliveries::index).post(deliveries::create))
        .route("/{id}/advance", post(deliveries::advance))
        .route("/{id}/confirm", post(deliveries::confirm))
}

/// Create the user management routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/{id}", put(users::update).delete(users::delete))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::show))
        .route("/products", get(products::index).post(products::create))
        .route("/highlights", get(highlights::index).post(highlights::create))
        .nest("/deliveries", delivery_routes())
        .nest("/users", user_routes())
}
