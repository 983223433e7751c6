use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::CompletionRequest;

enum MockBehaviour {
    Reply(String),
    Echo,
    Fail(LlmClientError),
}

/// In-process stand-in for the provider. Records every request it receives.
pub struct MockLlmClient {
    behaviour: MockBehaviour,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behaviour(MockBehaviour::Reply(reply.into()))
    }

    /// Replies with `echo: <last user message>`.
    pub fn echoing() -> Self {
        Self::with_behaviour(MockBehaviour::Echo)
    }

    pub fn failing(error: LlmClientError) -> Self {
        Self::with_behaviour(MockBehaviour::Fail(error))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::replying("Mock answer")
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behaviour {
            MockBehaviour::Reply(reply) => Ok(reply.clone()),
            MockBehaviour::Echo => Ok(format!(
                "echo: {}",
                request.last_user_message().unwrap_or_default()
            )),
            MockBehaviour::Fail(error) => Err(error.clone()),
        }
    }

    fn has_credential(&self) -> bool {
        !matches!(
            self.behaviour,
            MockBehaviour::Fail(LlmClientError::MissingCredential)
        )
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
