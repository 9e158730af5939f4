//! Integration tests for the siteverify captcha client.
//!
//! These tests run the real HTTP client against a local wiremock server,
//! covering both verdict shapes and the transport failure paths.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use verdict::captcha::{Captcha, CaptchaError, ErrorCode, SiteverifyClient, VerifyRequest};
use verdict::outcome::Outcome;

fn client_for(server: &MockServer) -> SiteverifyClient {
    SiteverifyClient::with_endpoint(format!("{}/siteverify", server.uri()), "test-secret")
}

#[tokio::test]
async fn success_body_maps_to_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "challenge_ts": "2026-08-27T10:00:00Z",
            "hostname": "example.test",
        })))
        .mount(&server)
        .await;

    let verdict = client_for(&server)
        .verify(VerifyRequest::new("valid-token"))
        .await;

    let verification = verdict.unwrap();
    assert_eq!(verification.hostname.as_deref(), Some("example.test"));
    assert_eq!(
        verification.challenge_ts.as_deref(),
        Some("2026-08-27T10:00:00Z")
    );
}

#[tokio::test]
async fn failure_body_maps_to_rejected_with_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error-codes": ["invalid-input-response", "some-future-code"],
        })))
        .mount(&server)
        .await;

    let verdict = client_for(&server)
        .verify(VerifyRequest::new("stale-token"))
        .await;

    assert_eq!(
        verdict,
        Outcome::Err(CaptchaError::Rejected {
            codes: vec![ErrorCode::InvalidInputResponse, ErrorCode::Unknown],
        })
    );
}

#[tokio::test]
async fn form_fields_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .and(body_string_contains("secret=test-secret"))
        .and(body_string_contains("response=tok-1"))
        .and(body_string_contains("remoteip=203.0.113.7"))
        .and(body_string_contains("sitekey=key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let verdict = client_for(&server)
        .verify(
            VerifyRequest::new("tok-1")
                .with_remote_ip("203.0.113.7")
                .with_site_key("key-1"),
        )
        .await;

    assert!(verdict.is_ok());
}

#[tokio::test]
async fn optional_fields_are_omitted_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.verify(VerifyRequest::new("tok")).await.is_ok());

    let received = &server.received_requests().await.unwrap()[0];
    let body = String::from_utf8_lossy(&received.body).to_string();
    assert!(!body.contains("remoteip"));
    assert!(!body.contains("sitekey"));
}

#[tokio::test]
async fn server_error_maps_to_api_error_not_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let verdict = client_for(&server).verify(VerifyRequest::new("tok")).await;

    assert_eq!(
        verdict,
        Outcome::Err(CaptchaError::ApiError {
            status: 503,
            message: "upstream down".into(),
        })
    );
}

#[tokio::test]
async fn garbage_body_maps_to_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let verdict = client_for(&server).verify(VerifyRequest::new("tok")).await;

    assert!(verdict.is_err_and(|e| matches!(e, CaptchaError::MalformedResponse(_))));
}

#[tokio::test]
async fn connection_failure_maps_to_network_error() {
    // Bind-then-drop leaves a port nothing is listening on. A bare
    // (non-pooled) server is required: pooled servers from
    // `MockServer::start` keep listening after drop.
    let server = MockServer::builder().start().await;
    let dead_uri = format!("{}/siteverify", server.uri());
    drop(server);

    let client = SiteverifyClient::with_endpoint(dead_uri, "test-secret");
    let verdict = client.verify(VerifyRequest::new("tok")).await;

    assert!(verdict.is_err_and(|e| matches!(e, CaptchaError::NetworkError(_))));
}
