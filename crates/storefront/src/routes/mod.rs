//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//!
//! # Cart
//! GET  /cart                           - Cart with totals
//! POST /cart/add                       - Add item (merges same product + delivery)
//! POST /cart/update                    - Overwrite a line's quantity
//! POST /cart/increment                 - One more unit
//! POST /cart/decrement                 - One less unit (floor of one)
//! POST /cart/remove                    - Remove a line
//! POST /cart/clear                     - Empty the cart
//! GET  /cart/count                     - Cart count badge
//!
//! # Postal codes
//! GET  /api/cep/{cep}                  - Address for a postal code
//!
//! # Checkout
//! POST /checkout/quote                 - Price the cart
//! POST /checkout                       - Place the order
//!
//! # Orders
//! GET  /orders                         - Order history
//! GET  /orders/{id}/tracking           - Tracking timeline
//! POST /orders/{id}/review             - Rate a delivered order
//!
//! # Loyalty
//! GET  /loyalty                        - Points, tier and rewards
//! POST /loyalty/referrals              - Credit a referral
//! POST /loyalty/rewards/{id}/redeem    - Exchange points for a reward
//!
//! # Autonomous store
//! GET  /autonomous                     - Visit status
//! POST /autonomous/qrcode              - Issue a QR code
//! POST /autonomous/enter               - Scan and enter
//! POST /autonomous/exit                - Leave the store
//! POST /autonomous/reset               - Back to start
//!
//! # Account
//! GET    /account/addresses            - Address list
//! POST   /account/addresses            - Save an address
//! DELETE /account/addresses/{id}       - Delete an address
//! ```

pub mod account;
pub mod autonomous;
pub mod cart;
pub mod cep;
pub mod checkout;
pub mod loyalty;
pub mod orders;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::place_order))
        .route("/quote", post(checkout::quote))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}/tracking", get(orders::tracking))
        .route("/{id}/review", post(orders::review))
}

/// Create the loyalty routes router.
pub fn loyalty_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(loyalty::show))
        .route("/referrals", post(loyalty::refer))
        .route("/rewards/{id}/redeem", post(loyalty::redeem))
}

/// Create the autonomous store routes router.
pub fn autonomous_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(autonomous::show))
        .route("/qrcode", post(autonomous::issue_qr))
        .route("/enter", post(autonomous::enter))
        .route("/exit", post(autonomous::exit))
        .route("/reset", post(autonomous::reset))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/addresses",
            get(account::addresses).post(account::create_address),
        )
        .route("/addresses/{id}", delete(account::delete_address))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/cart", cart_routes())
        .route("/api/cep/{cep}", get(cep::lookup))
        .nest("/checkout", checkout_routes())
        .nest("/orders", order_routes())
        .nest("/loyalty", loyalty_routes())
        .nest("/autonomous", autonomous_routes())
        .nest("/account", account_routes())
}
