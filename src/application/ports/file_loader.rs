use async_trait::async_trait;

use crate::domain::UploadedDocument;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Returns the document's plain text. An empty string is a valid result for a
    /// document without a text layer.
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError>;

    /// Whether PDF documents can be parsed by this loader.
    fn supports_pdf(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
