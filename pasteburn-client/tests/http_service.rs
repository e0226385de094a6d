//! Integration tests for the HTTP paste service.
//!
//! These run against a wiremock server; no real paste service is needed.
//!
//! ```bash
//! cargo test -p pasteburn-client --test http_service
//! ```

#![cfg(feature = "http")]

use std::time::Duration;

use pasteburn_client::test_utils::TestFixtures;
use pasteburn_client::{
    AccessKey, HttpPasteService, PasteError, PasteId, PasteService, ServiceConfig,
};
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn key() -> AccessKey {
    AccessKey::parse(TestFixtures::KEY).unwrap()
}

fn sample_id() -> PasteId {
    PasteId::parse(TestFixtures::SAMPLE_ID).unwrap()
}

fn service_for(server: &MockServer) -> HttpPasteService {
    HttpPasteService::new(ServiceConfig::new(server.uri()).with_timeout(2)).unwrap()
}

#[tokio::test]
async fn test_view_sends_key_and_id_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .and(query_param("key", TestFixtures::KEY))
        .and(query_param("id", TestFixtures::SAMPLE_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": TestFixtures::SAMPLE_ID,
            "body": "top secret"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = service_for(&mock_server)
        .view(&key(), &sample_id())
        .await
        .unwrap();

    assert_eq!(response.body(), Some("top secret"));
    assert_eq!(response.id(), Some(TestFixtures::SAMPLE_ID));
}

#[tokio::test]
async fn test_view_query_values_are_encoded() {
    let mock_server = MockServer::start().await;
    let odd_key = "a+b&c=d/e?f#g h%ijklmnopqrstuvwx";
    assert_eq!(odd_key.chars().count(), 32);

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .and(query_param("key", odd_key))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"body": "ok"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let key = AccessKey::parse(odd_key).unwrap();
    let response = service_for(&mock_server)
        .view(&key, &sample_id())
        .await
        .unwrap();
    assert_eq!(response.body(), Some("ok"));
}

#[tokio::test]
async fn test_create_posts_key_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text/create"))
        .and(body_json(serde_json::json!({
            "key": TestFixtures::KEY,
            "body": "hello"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": TestFixtures::SAMPLE_ID
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = service_for(&mock_server)
        .create(&key(), "hello")
        .await
        .unwrap();
    assert_eq!(response.id(), Some(TestFixtures::SAMPLE_ID));
}

#[tokio::test]
async fn test_create_accepts_capitalised_response() {
    let mock_server = MockServer::start().await;

    // Plain-text content type, exported field names.
    Mock::given(method("POST"))
        .and(path("/api/text/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "{{\"ID\":\"{}\",\"Body\":\"q83vEjRWeJA=\"}}\n",
            TestFixtures::SAMPLE_ID
        )))
        .mount(&mock_server)
        .await;

    let response = service_for(&mock_server)
        .create(&key(), "hello")
        .await
        .unwrap();
    assert_eq!(response.id(), Some(TestFixtures::SAMPLE_ID));
}

#[tokio::test]
async fn test_non_json_response_is_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server).view(&key(), &sample_id()).await;
    assert!(matches!(result, Err(PasteError::Serialization(_))));
}

#[tokio::test]
async fn test_error_statuses_are_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .respond_with(ResponseTemplate::new(500).set_body_string("cipher: message authentication failed"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/text/create"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    match service.view(&key(), &sample_id()).await {
        Err(PasteError::Server { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("authentication failed"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert!(matches!(
        service.create(&key(), "x").await,
        Err(PasteError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn test_not_found_carries_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    match service_for(&mock_server).view(&key(), &sample_id()).await {
        Err(PasteError::NotFound { id }) => assert_eq!(id, TestFixtures::SAMPLE_ID),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/text/view"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"body": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let service =
        HttpPasteService::new(ServiceConfig::new(mock_server.uri()).with_timeout(1)).unwrap();
    let err = service.view(&key(), &sample_id()).await.unwrap_err();

    assert!(err.is_retryable(), "timeout should be retryable: {:?}", err);
}

#[tokio::test]
async fn test_unreachable_service_is_connection_error() {
    // Port 9 (discard) is closed on test hosts.
    let service = HttpPasteService::new(ServiceConfig::new("http://127.0.0.1:9")).unwrap();
    let err = service.view(&key(), &sample_id()).await.unwrap_err();

    assert!(err.is_retryable(), "expected retryable error, got {:?}", err);
}
