use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedDocument;

#[cfg(feature = "pdf")]
use super::pdf_adapter::PdfAdapter;

pub const PDF_UNAVAILABLE_MESSAGE: &str = "PDF parsing support is not available";

/// PDF parsing capability, decided once at startup.
pub enum PdfSupport {
    #[cfg(feature = "pdf")]
    Available(PdfAdapter),
    Unavailable,
}

impl PdfSupport {
    /// Chooses `Available` only when the parser is compiled in and `enabled` is set.
    pub fn detect(enabled: bool) -> Self {
        #[cfg(feature = "pdf")]
        if enabled {
            return Self::Available(PdfAdapter::new());
        }

        if enabled {
            tracing::warn!("PDF extraction requested but the `pdf` feature is not compiled in");
        }
        Self::Unavailable
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

#[async_trait]
impl FileLoader for PdfSupport {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        match self {
            #[cfg(feature = "pdf")]
            Self::Available(adapter) => adapter.extract_text(document).await,
            Self::Unavailable => Err(FileLoaderError::UnsupportedFormat(
                PDF_UNAVAILABLE_MESSAGE.to_string(),
            )),
        }
    }

    fn supports_pdf(&self) -> bool {
        self.is_available()
    }
}
