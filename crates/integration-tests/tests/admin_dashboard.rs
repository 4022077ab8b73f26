//! Dashboard aggregates over live board data.

use atadiesel_integration_tests::{admin, get_json, post_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_dashboard_reflects_orders_and_users() {
    let app = admin();

    post_json(&app, "/users", json!({ "name": "Ana", "email": "ana@example.com" })).await;
    for (name, quantity) in [("Óleo Motor 5W30", 3), ("Filtro de Ar", 1)] {
        let (status, _) = post_json(
            &app,
            "/deliveries",
            json!({
                "customer": "Ana",
                "address": "Rua A, 1",
                "items": [{ "name": name, "quantity": quantity, "unit_price": "100.00" }]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    for period in ["daily", "weekly", "monthly"] {
        let (status, report) = get_json(&app, &format!("/dashboard?period={period}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["totals"]["users"], 1);
        assert_eq!(report["totals"]["orders"], 2);
        assert_eq!(report["totals"]["revenue"], "400.00");
        assert_eq!(report["top_products"][0]["name"], "Óleo Motor 5W30");
        assert_eq!(report["top_products"][0]["units"], 3);
        // Orders placed just now land in the current bucket of every period
        assert_eq!(report["chart"]["max"], "400.00");
        assert_eq!(report["chart"]["period"], period);
    }

    let (_, monthly) = get_json(&app, "/dashboard").await;
    assert_eq!(monthly["chart"]["bars"].as_array().map(Vec::len), Some(12));
}
