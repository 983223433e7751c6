use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

/// Decodes `.txt` uploads as UTF-8, replacing invalid sequences.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Text) {
            return Err(FileLoaderError::UnsupportedFormat(format!(
                "plain text loader cannot read '.{}' files",
                document.extension
            )));
        }

        Ok(String::from_utf8_lossy(&document.data).into_owned())
    }
}
