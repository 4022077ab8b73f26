//! Cart API: merge-by-(product, delivery) and quantity edits.

use atadiesel_integration_tests::{cart_item, get_json, post_json, send, storefront};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_same_product_merges_per_delivery_method() {
    let app = storefront();

    post_json(&app, "/cart/add", cart_item("oleo-5w30", "49.90", 1, "casa")).await;
    post_json(&app, "/cart/add", cart_item("oleo-5w30", "49.90", 2, "casa")).await;
    let (status, cart) = post_json(&app, "/cart/add", cart_item("oleo-5w30", "49.90", 1, "loja")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["line_count"], 2);
    assert_eq!(cart["item_count"], 4);
    assert_eq!(cart["items"][0]["quantity"], 3);
    assert_eq!(cart["items"][0]["delivery"], "casa");
    assert_eq!(cart["items"][1]["delivery"], "loja");
    assert_eq!(cart["subtotal"], "199.60");
}

#[tokio::test]
async fn test_quantity_edits() {
    let app = storefront();
    post_json(&app, "/cart/add", cart_item("filtro-ar", "25.00", 1, "casa")).await;
    let key = json!({ "id": "filtro-ar", "delivery": "casa" });

    let (_, cart) = post_json(&app, "/cart/decrement", key.clone()).await;
    assert_eq!(cart["items"][0]["quantity"], 1, "decrement stops at one");

    let (_, cart) = post_json(&app, "/cart/increment", key.clone()).await;
    assert_eq!(cart["items"][0]["quantity"], 2);

    let (_, cart) = post_json(
        &app,
        "/cart/update",
        json!({ "id": "filtro-ar", "delivery": "casa", "quantity": 5 }),
    )
    .await;
    assert_eq!(cart["items"][0]["quantity"], 5);
    assert_eq!(cart["items"][0]["line_total"], "125.00");

    let (_, count) = get_json(&app, "/cart/count").await;
    assert_eq!(count["count"], 5);
}

#[tokio::test]
async fn test_edits_only_touch_the_matching_line() {
    let app = storefront();
    post_json(&app, "/cart/add", cart_item("palheta", "30.00", 1, "casa")).await;

    // Same product, other delivery method: no such line
    let (_, cart) = post_json(
        &app,
        "/cart/increment",
        json!({ "id": "palheta", "delivery": "loja" }),
    )
    .await;
    assert_eq!(cart["line_count"], 1);
    assert_eq!(cart["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let app = storefront();
    post_json(&app, "/cart/add", cart_item("a", "10.00", 1, "casa")).await;
    post_json(&app, "/cart/add", cart_item("b", "20.00", 1, "loja")).await;

    let (_, cart) = post_json(&app, "/cart/remove", json!({ "id": "a", "delivery": "casa" })).await;
    assert_eq!(cart["line_count"], 1);
    assert_eq!(cart["items"][0]["id"], "b");

    let (status, cart) = send(&app, Method::POST, "/cart/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["line_count"], 0);
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
async fn test_rejects_unknown_delivery_method() {
    let app = storefront();
    let (status, _) = post_json(&app, "/cart/add", cart_item("a", "10.00", 1, "drone")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_oversized_line_keeps_cart_readable() {
    let app = storefront();
    post_json(&app, "/cart/add", cart_item("motor", "1000000000000000000", i64::MAX, "casa")).await;
    let (status, _) = post_json(&app, "/cart/add", cart_item("motor", "1000000000000000000", 1, "casa")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, cart) = get_json(&app, "/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["item_count"], i64::MAX);
    assert_eq!(cart["subtotal"], "79228162514264337593543950335");

    let (status, _) = post_json(&app, "/checkout/quote", json!({ "method": "loja" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::POST, "/cart/clear", None).await;
    assert_eq!(status, StatusCode::OK);
}
