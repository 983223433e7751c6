use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, SessionStore};
use crate::domain::{SessionId, Turn};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompt_builder::PromptBuilder;
use super::response_formatter::format_chat_reply;

pub struct ChatService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    session_store: Arc<dyn SessionStore>,
    prompt_builder: PromptBuilder,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(
        llm_client: Arc<L>,
        session_store: Arc<dyn SessionStore>,
        prompt_builder: PromptBuilder,
    ) -> Self {
        Self {
            llm_client,
            session_store,
            prompt_builder,
        }
    }

    /// Runs one conversational exchange.
    ///
    /// The prompt is built from a history snapshot; no store lock is held while the
    /// provider is called. The user and assistant turns are recorded together only
    /// after a successful reply, so a failed exchange leaves the session untouched.
    #[tracing::instrument(skip(self, session_id, message), fields(session_id = tracing::field::Empty))]
    pub async fn chat(
        &self,
        session_id: Option<SessionId>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let session_id = session_id.unwrap_or_default();
        tracing::Span::current().record("session_id", session_id.as_str());
        tracing::debug!(prompt = %sanitize_prompt(message), "Processing chat message");

        let session = self.session_store.get_or_create(&session_id).await;
        let request = self.prompt_builder.chat(&session, message);

        let raw_reply = self.llm_client.complete(&request).await?;
        let reply = format_chat_reply(&raw_reply);

        self.session_store
            .append_all(
                &session_id,
                vec![Turn::user(message), Turn::assistant(reply.as_str())],
            )
            .await;

        tracing::info!(history_turns = session.len() + 2, "Chat exchange recorded");

        Ok(ChatReply { session_id, reply })
    }

    /// Sends the canned connectivity prompt to the provider.
    #[tracing::instrument(skip(self))]
    pub async fn probe(&self) -> Result<String, LlmClientError> {
        let request = self.prompt_builder.connectivity_probe();
        let reply = self.llm_client.complete(&request).await?;
        Ok(format_chat_reply(&reply))
    }

    pub fn provider_configured(&self) -> bool {
        self.llm_client.has_credential()
    }

    pub fn model(&self) -> &str {
        self.llm_client.model()
    }
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub session_id: SessionId,
    pub reply: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
