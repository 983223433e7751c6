mod file_loader;
mod llm_client;
mod session_store;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use session_store::SessionStore;
