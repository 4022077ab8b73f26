//! Integration tests for Atadiesel.
//!
//! Both services are driven in-process through `tower::ServiceExt::oneshot`;
//! no ports are bound except by the fake ViaCEP server.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atadiesel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_*` - Storefront API tests
//! - `admin_*` - Admin API tests

use atadiesel_admin::config::AdminConfig;
use atadiesel_storefront::config::StorefrontConfig;
use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Method, Request, StatusCode, header},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Largest response body the helpers will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Postal code the fake ViaCEP server knows about.
pub const KNOWN_CEP: &str = "01001000";

/// Storefront app with default configuration.
#[must_use]
pub fn storefront() -> Router {
    storefront_with(|_| None)
}

/// Storefront app that resolves postal codes against `viacep_base_url`.
#[must_use]
pub fn storefront_with_viacep(viacep_base_url: &str) -> Router {
    let base = viacep_base_url.to_string();
    storefront_with(move |key| (key == "VIACEP_BASE_URL").then(|| base.clone()))
}

fn storefront_with(lookup: impl Fn(&str) -> Option<String>) -> Router {
    let config = StorefrontConfig::from_lookup(lookup).expect("storefront config");
    let state = atadiesel_storefront::state::AppState::new(config).expect("storefront state");
    atadiesel_storefront::app(state)
}

/// Admin app with default configuration.
#[must_use]
pub fn admin() -> Router {
    let config = AdminConfig::from_lookup(|_| None).expect("admin config");
    atadiesel_admin::app(atadiesel_admin::state::AppState::new(config))
}

/// Send one request and decode the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("infallible router");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .expect("response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Start a ViaCEP stand-in on an ephemeral port and return its base URL.
///
/// It answers [`KNOWN_CEP`] with an address and every other code with
/// ViaCEP's `{"erro": true}`.
pub async fn spawn_fake_viacep() -> String {
    async fn lookup(Path(cep): Path<String>) -> Json<Value> {
        if cep == KNOWN_CEP {
            Json(json!({
                "cep": "01001-000",
                "logradouro": "Praça da Sé",
                "complemento": "lado ímpar",
                "bairro": "Sé",
                "localidade": "São Paulo",
                "uf": "SP"
            }))
        } else {
            Json(json!({ "erro": true }))
        }
    }

    let app = Router::new().route("/ws/{cep}/json/", get(lookup));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake ViaCEP");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake ViaCEP server");
    });

    format!("http://{addr}/ws")
}

/// A cart line as the mobile client posts it.
#[must_use]
pub fn cart_item(id: &str, unit_price: &str, quantity: i64, delivery: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Produto {id}"),
        "category": "Lubrificantes",
        "image": "",
        "unit_price": unit_price,
        "quantity": quantity,
        "delivery": delivery,
    })
}
