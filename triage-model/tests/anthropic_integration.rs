//! HTTP-level tests for the Anthropic client against a local mock server.

use serde_json::json;
use triage_model::{AnthropicClient, AnthropicConfig, ModelEndpoint};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AnthropicClient {
    let config = AnthropicConfig::new("test-key", "claude-sonnet-4-20250514")
        .with_max_tokens(2000)
        .with_temperature(0.0)
        .with_base_url(server.uri());
    AnthropicClient::new(config).expect("client construction")
}

#[tokio::test]
async fn test_complete_sends_expected_request_and_parses_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 2000,
            "messages": [{"role": "user"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "{\"urgency\":\"FYI\"}"}],
            "usage": {"input_tokens": 321, "output_tokens": 45}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let output = client.complete("triage this item").await.unwrap();

    assert_eq!(output.text, "{\"urgency\":\"FYI\"}");
    assert_eq!(output.input_tokens, 321);
    assert_eq!(output.output_tokens, 45);
}

#[tokio::test]
async fn test_complete_concatenates_text_blocks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "{\"urgency\":"},
                {"type": "text", "text": "\"HIGH\"}"}
            ],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let output = client.complete("p").await.unwrap();
    assert_eq!(output.text, "{\"urgency\":\"HIGH\"}");
}

#[tokio::test]
async fn test_non_success_status_maps_to_model_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("{\"error\":\"rate_limit_error\"}"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.complete("p").await.unwrap_err();

    match err {
        triage_core::TriageError::Model(msg) => {
            assert!(msg.contains("429"), "error should carry the status: {msg}");
            assert!(msg.contains("rate_limit_error"), "error should carry the body: {msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_missing_usage_defaults_to_zero_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "ok"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let output = client.complete("p").await.unwrap();
    assert_eq!(output.input_tokens, 0);
    assert_eq!(output.output_tokens, 0);
}
