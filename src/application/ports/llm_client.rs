use std::time::Duration;

use async_trait::async_trait;

use crate::domain::CompletionRequest;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one completion request and returns the provider's reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError>;

    /// Whether a credential is configured. Never touches the network.
    fn has_credential(&self) -> bool;

    fn model(&self) -> &str;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmClientError {
    #[error("no provider credential configured")]
    MissingCredential,
    #[error("completion request contains no text")]
    EmptyPrompt,
    #[error("provider did not respond within {0:?}")]
    ProviderTimeout(Duration),
    #[error("provider rejected the credential (HTTP {status})")]
    AuthenticationFailed { status: u16 },
    #[error("provider returned HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    ProviderError { status: u16, message: Option<String> },
    #[error("provider request failed: {0}")]
    RequestFailed(String),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl LlmClientError {
    /// Stable label reported to API clients and health probes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::EmptyPrompt => "EmptyPrompt",
            Self::ProviderTimeout(_) => "ProviderTimeout",
            Self::AuthenticationFailed { .. } => "ProviderAuthFailed",
            Self::ProviderError { .. } => "ProviderError",
            Self::RequestFailed(_) => "ProviderUnavailable",
            Self::MalformedResponse(_) => "MalformedResponse",
        }
    }
}
