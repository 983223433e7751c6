use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

/// Routes each upload to the loader registered for its content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        let adapter = document
            .content_type()
            .and_then(|content_type| self.adapters.get(&content_type))
            .ok_or_else(|| {
                FileLoaderError::UnsupportedFormat(format!(
                    "no loader for '.{}' files",
                    document.extension
                ))
            })?;

        adapter.extract_text(document).await
    }

    fn supports_pdf(&self) -> bool {
        self.adapters
            .get(&ContentType::Pdf)
            .is_some_and(|adapter| adapter.supports_pdf())
    }
}
