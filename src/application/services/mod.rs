mod chat_service;
mod prompt_builder;
pub mod response_formatter;
mod summary_service;

pub use chat_service::{ChatError, ChatReply, ChatService};
pub use prompt_builder::{
    DEFAULT_HISTORY_WINDOW, DEFAULT_SYSTEM_PROMPT, KEYWORD_EXCERPT_CHARS, PromptBuilder,
};
pub use response_formatter::{format_chat_reply, parse_keywords, parse_summary};
pub use summary_service::{
    DEFAULT_MAX_PROMPT_CHARS, DEFAULT_MAX_UPLOAD_BYTES, DocumentSummary, SummaryError,
    SummaryService, UploadLimits,
};
