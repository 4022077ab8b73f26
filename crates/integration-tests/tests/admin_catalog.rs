//! Product registration and highlights.

use atadiesel_integration_tests::{admin, get_json, post_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_product_with_brl_prices() {
    let app = admin();

    let (status, product) = post_json(
        &app,
        "/products",
        json!({
            "name": "Óleo Motor 5W30",
            "description": "Sintético, 1L",
            "price_current": "R$ 1.250,00",
            "price_promo": "R$ 1.000,00",
            "category": "Lubrificantes",
            "stock": "30",
            "sku": "OLEO-5W30-1L",
            "image": "https://cdn.example.com/oleo.png"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["price_current"], "1250.00");
    assert_eq!(product["price_promo"], "1000.00");
    assert_eq!(product["discount_percent"], 20);
    assert_eq!(product["stock"], 30);

    let (_, list) = get_json(&app, "/products").await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["sku"], "OLEO-5W30-1L");
}

#[tokio::test]
async fn test_product_name_required() {
    let app = admin();
    let (status, body) = post_json(&app, "/products", json!({ "price_current": "10,00" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product name is required");
}

#[tokio::test]
async fn test_highlights() {
    let app = admin();

    let (status, body) = post_json(&app, "/highlights", json!({ "title": "Semana do Freio" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title and image are required");

    let (status, _) = post_json(
        &app,
        "/highlights",
        json!({
            "title": "Semana do Freio",
            "description": "Pastilhas com 15% off",
            "image": "https://cdn.example.com/freio.png"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = get_json(&app, "/highlights").await;
    assert_eq!(list[0]["title"], "Semana do Freio");
}
