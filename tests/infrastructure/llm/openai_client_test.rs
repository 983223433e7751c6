use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use concierge::application::ports::{LlmClient, LlmClientError};
use concierge::domain::{CompletionRequest, PromptMessage};
use concierge::infrastructure::llm::OpenAiClient;

const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

struct MockProvider {
    endpoint: String,
    hits: Arc<AtomicUsize>,
    shutdown: oneshot::Sender<()>,
}

async fn start_mock_provider(
    response_status: u16,
    response_body: &'static str,
    delay: Duration,
) -> MockProvider {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let app = Router::new().route(
        COMPLETIONS_PATH,
        post(move |headers: HeaderMap| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                let authorized = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v == "Bearer test-key");
                if !authorized {
                    return (StatusCode::UNAUTHORIZED, "missing bearer").into_response();
                }
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    MockProvider {
        endpoint: format!("http://{}{}", addr, COMPLETIONS_PATH),
        hits,
        shutdown: shutdown_tx,
    }
}

fn client(endpoint: &str, api_key: &str, timeout: Duration) -> OpenAiClient {
    OpenAiClient::new(
        endpoint,
        api_key.to_string(),
        "test-model".to_string(),
        timeout,
    )
}

fn hello_request() -> CompletionRequest {
    CompletionRequest {
        messages: vec![PromptMessage::system("be nice"), PromptMessage::user("hello")],
        temperature: 0.9,
        max_tokens: 50,
    }
}

#[tokio::test]
async fn given_chat_completion_reply_when_completing_then_returns_message_content() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Hi there!  "}}]}"#;
    let provider = start_mock_provider(200, body, Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert_eq!(result.unwrap(), "Hi there!");
    assert_eq!(provider.hits.load(Ordering::SeqCst), 1);
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_legacy_text_reply_when_completing_then_falls_back_to_choice_text() {
    let body = r#"{"choices":[{"text":"Legacy answer"}]}"#;
    let provider = start_mock_provider(200, body, Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert_eq!(result.unwrap(), "Legacy answer");
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_generated_text_reply_when_completing_then_falls_back_to_generated_text() {
    let body = r#"{"generated_text":"Generated answer"}"#;
    let provider = start_mock_provider(200, body, Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert_eq!(result.unwrap(), "Generated answer");
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_provider_error_with_message() {
    let body = r#"{"error":{"message":"upstream exploded","code":500}}"#;
    let provider = start_mock_provider(500, body, Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    match result {
        Err(LlmClientError::ProviderError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("upstream exploded"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_rejected_credential_when_completing_then_returns_authentication_failed() {
    let provider = start_mock_provider(200, "{}", Duration::ZERO).await;
    let client = client(&provider.endpoint, "wrong-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert!(matches!(
        result,
        Err(LlmClientError::AuthenticationFailed { status: 401 })
    ));
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_non_json_reply_when_completing_then_returns_malformed_response() {
    let provider = start_mock_provider(200, "<html>oops</html>", Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert!(matches!(result, Err(LlmClientError::MalformedResponse(_))));
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_reply_without_content_when_completing_then_returns_malformed_response() {
    let provider = start_mock_provider(200, r#"{"choices":[]}"#, Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert!(matches!(result, Err(LlmClientError::MalformedResponse(_))));
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_slow_provider_when_completing_then_returns_timeout() {
    let body = r#"{"choices":[{"message":{"content":"too late"}}]}"#;
    let provider = start_mock_provider(200, body, Duration::from_secs(2)).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_millis(200));

    let result = client.complete(&hello_request()).await;

    assert!(matches!(result, Err(LlmClientError::ProviderTimeout(_))));
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_missing_credential_when_completing_then_no_request_is_sent() {
    let provider = start_mock_provider(200, "{}", Duration::ZERO).await;
    let client = client(&provider.endpoint, "   ", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert!(matches!(result, Err(LlmClientError::MissingCredential)));
    assert!(!client.has_credential());
    assert_eq!(provider.hits.load(Ordering::SeqCst), 0);
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_blank_prompt_when_completing_then_returns_empty_prompt_without_request() {
    let provider = start_mock_provider(200, "{}", Duration::ZERO).await;
    let client = client(&provider.endpoint, "test-key", Duration::from_secs(5));
    let request = CompletionRequest {
        messages: vec![PromptMessage::user("   ")],
        temperature: 0.9,
        max_tokens: 50,
    };

    let result = client.complete(&request).await;

    assert!(matches!(result, Err(LlmClientError::EmptyPrompt)));
    assert_eq!(provider.hits.load(Ordering::SeqCst), 0);
    provider.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_provider_when_completing_then_reports_provider_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}{}", listener.local_addr().unwrap(), COMPLETIONS_PATH);
    drop(listener);
    let client = client(&endpoint, "test-key", Duration::from_secs(5));

    let result = client.complete(&hello_request()).await;

    assert_eq!(result.unwrap_err().kind(), "ProviderUnavailable");
}
