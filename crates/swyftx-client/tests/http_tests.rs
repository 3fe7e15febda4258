/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{mock_api_key, mock_client, setup_mock_server};
use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;
use swyftx_client::{
    AccountSettings, ClientConfig, DEFAULT_BASE_URL, OrderPlace, RequestScope, SwyftxClient,
    SwyftxError,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_with_config() {
    let client = assert_ok!(SwyftxClient::with_config(ClientConfig::default(), "key"));
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.api_key(), "key");
    assert!(client.token().is_none());
    assert!(client.user_agent().starts_with("swyftx-client/"));
}

#[tokio::test]
async fn test_deadline_snapshot_shares_identity() {
    let server = setup_mock_server().await;
    let client = mock_client(&server);

    let bounded = client.with_deadline(tokio::time::Instant::now() + Duration::from_secs(30));
    assert_eq!(bounded.token(), client.token());
    assert_eq!(bounded.api_key(), client.api_key());
    assert_eq!(bounded.base_url(), client.base_url());
    assert!(bounded.scope().deadline().is_some());
    assert!(client.scope().deadline().is_none());

    bounded.scope().cancel();
    assert!(bounded.scope().is_cancelled());
    assert!(!client.scope().is_cancelled());
}

#[tokio::test]
async fn test_cancelled_scope_fails_request() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1"})))
        .expect(0)
        .mount(&server)
        .await;

    let scope = RequestScope::new();
    scope.cancel();
    let client = mock_client(&server).with_scope(scope);

    let err = client.version().await.unwrap_err();
    assert!(matches!(err, SwyftxError::Cancelled));
}

#[tokio::test]
async fn test_domain_error_exposes_envelope() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"error": "Forbidden", "message": "Key lacks scope"}
        })))
        .mount(&server)
        .await;

    let err = mock_client(&server).account().profile().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    let envelope = err.api_error().expect("envelope");
    assert_eq!(envelope.summary, "Forbidden");
    assert_eq!(envelope.message, "Key lacks scope");
}

#[tokio::test]
async fn test_transport_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1/".to_string(),
        ..ClientConfig::default()
    };
    let client = assert_ok!(SwyftxClient::with_config(config, mock_api_key())).with_token("t");
    let err = client.version().await.unwrap_err();
    assert!(matches!(err, SwyftxError::Transport(_)));
}

#[tokio::test]
async fn test_standard_headers_and_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user/settings/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"data": {"analyticsOptOut": true}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {"email": "trader@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = AccountSettings {
        analytics_opt_out: true,
        ..AccountSettings::default()
    };
    let profile = assert_ok!(mock_client(&server).account().update_settings(&settings).await);
    assert_eq!(profile.email, "trader@example.com");

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("swyftx-client/"));
}

#[tokio::test]
async fn test_generic_request_round_trip() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/orders/"))
        .and(body_json(json!({
            "primary": "AUD",
            "secondary": "ETH",
            "quantity": 0.5,
            "assetQuantity": "ETH",
            "orderType": "3",
            "trigger": 2500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let order = OrderPlace {
        primary: "AUD".to_string(),
        secondary: "ETH".to_string(),
        quantity: Decimal::new(5, 1),
        asset_quantity: "ETH".to_string(),
        order_type: "3".to_string(),
        trigger: Decimal::from(2500),
    };
    let client = mock_client(&server);
    let value: serde_json::Value = assert_ok!(
        client
            .request(Method::POST, "orders/", Some(&order))
            .await
    );
    assert_eq!(value["orderId"], 42);
}

#[tokio::test]
async fn test_withdraw_body_is_exact() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/funds/withdraw/3"))
        .and(body_string(r#"{"quantity":0.12345678901234567891,"address_id":12}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let quantity = assert_ok!("0.12345678901234567891".parse::<Decimal>());
    let client = mock_client(&server);
    assert_ok!(client.funds(12).withdraw(3, quantity).await);
}
