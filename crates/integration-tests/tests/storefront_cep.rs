//! Postal code lookups against a local ViaCEP stand-in.

use atadiesel_integration_tests::{KNOWN_CEP, get_json, spawn_fake_viacep, storefront_with_viacep};
use axum::http::StatusCode;

#[tokio::test]
async fn test_known_cep_resolves_to_address() {
    let app = storefront_with_viacep(&spawn_fake_viacep().await);

    let (status, body) = get_json(&app, &format!("/api/cep/{KNOWN_CEP}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["cep"], "01001-000");
    assert_eq!(body["address"]["street"], "Praça da Sé");
    assert_eq!(body["address"]["neighborhood"], "Sé");
    assert_eq!(body["address"]["city"], "São Paulo");
    assert_eq!(body["address"]["state"], "SP");
}

#[tokio::test]
async fn test_formatted_cep_is_accepted() {
    let app = storefront_with_viacep(&spawn_fake_viacep().await);
    let (status, body) = get_json(&app, "/api/cep/01001-000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
}

#[tokio::test]
async fn test_unknown_cep_is_not_found_but_ok() {
    let app = storefront_with_viacep(&spawn_fake_viacep().await);

    let (status, body) = get_json(&app, "/api/cep/99999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert_eq!(body["address"]["street"], "");
}

#[tokio::test]
async fn test_unreachable_service_degrades_to_not_found() {
    // Nothing listens on port 9 of localhost
    let app = storefront_with_viacep("http://127.0.0.1:9/ws");

    let (status, body) = get_json(&app, &format!("/api/cep/{KNOWN_CEP}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
}

#[tokio::test]
async fn test_malformed_cep_is_rejected() {
    let app = storefront_with_viacep(&spawn_fake_viacep().await);
    let (status, body) = get_json(&app, "/api/cep/123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
