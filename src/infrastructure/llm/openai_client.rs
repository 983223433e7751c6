use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{CompletionRequest, PromptMessage};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: usize,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderErrorDetail {
    Structured { message: String },
    Plain(String),
}

impl ChatCompletionResponse {
    fn into_content(self) -> Option<String> {
        let from_choice = self.choices.into_iter().next().and_then(|choice| {
            choice
                .message
                .and_then(|m| m.content)
                .filter(|c| !c.trim().is_empty())
                .or(choice.text)
        });

        from_choice
            .filter(|c| !c.trim().is_empty())
            .or(self.text)
            .filter(|c| !c.trim().is_empty())
            .or(self.generated_text)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
    }
}

impl OpenAiClient {
    pub fn new(endpoint: &str, api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            model,
            timeout,
        }
    }

    fn classify_transport_error(&self, error: reqwest::Error) -> LlmClientError {
        if error.is_timeout() {
            LlmClientError::ProviderTimeout(self.timeout)
        } else {
            LlmClientError::RequestFailed(error.to_string())
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(
        skip(self, request),
        fields(model = %self.model, messages = request.messages.len())
    )]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        if request.messages.is_empty() || request.is_blank() {
            return Err(LlmClientError::EmptyPrompt);
        }

        if self.api_key.is_empty() {
            tracing::warn!("No provider credential configured; skipping provider call");
            return Err(LlmClientError::MissingCredential);
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Provider responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LlmClientError::AuthenticationFailed {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Provider returned an error");
            return Err(LlmClientError::ProviderError {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let raw = response
            .bytes()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let completion: ChatCompletionResponse = serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!(raw_response = %String::from_utf8_lossy(&raw), "Failed to parse provider JSON");
            LlmClientError::MalformedResponse(e.to_string())
        })?;

        completion
            .into_content()
            .ok_or_else(|| LlmClientError::MalformedResponse("no content in reply".to_string()))
    }

    fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Extracts `error.message` from a provider error body, falling back to the raw text.
fn provider_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(body) {
        return Some(match parsed.error {
            ProviderErrorDetail::Structured { message } => message,
            ProviderErrorDetail::Plain(message) => message,
        });
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect())
    }
}
