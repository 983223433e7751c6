use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{ChatService, SummaryService};

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub chat_service: Arc<ChatService<L>>,
    pub summary_service: Arc<SummaryService<F, L>>,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            summary_service: Arc::clone(&self.summary_service),
        }
    }
}
