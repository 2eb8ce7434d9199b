//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow a caller goes through: build a config, let a
//! transport fetch a response, hand it to the decoding layer.

use moneybird::{Config, Error, Response};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(server: &MockServer, config: &Config, route: &str) -> Response {
    let raw = reqwest::Client::new()
        .get(format!("{}{route}", server.uri()))
        .bearer_auth(config.token())
        .header("user-agent", config.user_agent())
        .send()
        .await
        .unwrap();
    Response::new(raw)
}

fn test_config(server: &MockServer) -> Config {
    Config::builder()
        .base_url(server.uri())
        .administration_id("123")
        .token("test-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_and_decode_contact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/contacts/1.json"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "287831336458651648",
            "company_name": "Moneybird",
            "firstname": "Danny",
            "email": "info@moneybird.test"
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let response = fetch(&server, &config, "/123/contacts/1.json").await;

    assert!(response.status().is_success());
    let contact = response.contact().await.unwrap();
    assert_eq!(contact.company_name.as_deref(), Some("Moneybird"));
    assert_eq!(contact.firstname.as_deref(), Some("Danny"));
}

#[tokio::test]
async fn test_fetch_and_decode_invoice_with_details() {
    let server = MockServer::start().await;

    // The live API answers with `details`, not `details_attributes`.
    Mock::given(method("GET"))
        .and(path("/123/sales_invoices/9.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9",
            "state": "open",
            "invoice_date": "2016-09-07",
            "details": [
                {"id": "1", "description": "Rocket fuel", "price": "299.99", "amount": "2"}
            ]
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let response = fetch(&server, &config, "/123/sales_invoices/9.json").await;
    let invoice = response.invoice().await.unwrap();

    assert_eq!(invoice.state.as_deref(), Some("open"));
    assert_eq!(invoice.details.len(), 1);
    assert_eq!(invoice.details[0].description.as_deref(), Some("Rocket fuel"));

    // The decoded invoice serializes back in request shape.
    let out = serde_json::to_value(&invoice).unwrap();
    assert!(out.get("details_attributes").is_some());
    assert!(out.get("details").is_none());
}

#[tokio::test]
async fn test_failure_response_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/contacts/404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "invalid contact"
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let response = fetch(&server, &config, "/123/contacts/404.json").await;

    assert!(!response.status().is_success());
    let err = response.api_error().await;
    assert_eq!(err.to_string(), "moneybird: invalid contact");
    assert_eq!(err.as_api().unwrap().status().as_u16(), 404);
}

#[tokio::test]
async fn test_failure_response_without_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/contacts/500.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let response = fetch(&server, &config, "/123/contacts/500.json").await;
    let err = response.api_error().await;

    // Unparseable error bodies surface the parse error, not an ApiError.
    assert!(matches!(err, Error::Decode(_)));
}
