mod chat;
mod error;
mod health;
mod upload;

pub use chat::{ChatRequest, ChatResponse, chat_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::{HealthResponse, health_handler};
pub use provider_test::{ProviderTestResponse, provider_test_handler};
pub use upload::{FILE_FIELD, UploadResponse, upload_handler};
