//! HTTP-level tests for the OpenAI-compatible provider against a mock
//! server.

use detour::prelude::*;
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> CompletionRequest {
    CompletionRequest {
        system: Some("be terse".into()),
        messages: vec![Message::user("hi")],
        max_output_tokens: 64,
    }
}

#[tokio::test]
async fn complete_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Hello there"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = ChatCompletionsProvider::new("test-model", "test-key", Some(server.uri()));
    let text = provider.complete(&request()).await.unwrap();

    assert_eq!(text, "Hello there");
}

#[tokio::test]
async fn auth_failure_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let provider = ChatCompletionsProvider::new("test-model", "bad-key", Some(server.uri()));
    let err = provider.complete(&request()).await.unwrap_err();

    assert!(matches!(err, DetourError::Authentication(_)));
}

#[tokio::test]
async fn rate_limit_maps_with_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"error": {"retry_after": 2.0}})),
        )
        .mount(&server)
        .await;

    let provider = ChatCompletionsProvider::new("test-model", "test-key", Some(server.uri()));
    let err = provider.complete(&request()).await.unwrap_err();

    match err {
        DetourError::RateLimited { retry_after_ms } => assert_eq!(retry_after_ms, Some(2000)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let provider = ChatCompletionsProvider::new("test-model", "test-key", Some(server.uri()));
    let err = provider.complete(&request()).await.unwrap_err();

    assert!(matches!(err, DetourError::Api { status: 500, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn empty_choices_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .mount(&server)
        .await;

    let provider = ChatCompletionsProvider::new("test-model", "test-key", Some(server.uri()));
    let err = provider.complete(&request()).await.unwrap_err();

    assert!(matches!(err, DetourError::Api { status: 200, .. }));
}

#[tokio::test]
async fn agent_end_to_end_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Hi!"}}]
        })))
        .mount(&server)
        .await;

    let config = DetourConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        ..Default::default()
    };
    let mut agent = Agent::new(config.into_provider()).with_system_prompt("You are brief.");
    let reply = agent.run("hello").await;

    assert_eq!(reply, "Hi!");
    assert_eq!(agent.transcript().len(), 2);
}
