mod document;
mod extracted_text;
mod prompt;
mod role;
mod session;
mod session_id;
mod summary;
mod turn;

pub use document::{ContentType, UploadedDocument};
pub use extracted_text::ExtractedText;
pub use prompt::{CompletionRequest, PromptMessage};
pub use role::Role;
pub use session::Session;
pub use session_id::SessionId;
pub use summary::{EMPTY_SUMMARY_BULLET, Summary};
pub use turn::Turn;
