use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedDocument;

/// Lossy UTF-8 loader that counts how often it is asked to extract.
#[derive(Default)]
pub struct MockFileLoader {
    calls: AtomicUsize,
}

impl MockFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(String::from_utf8_lossy(&document.data).into_owned())
    }

    fn supports_pdf(&self) -> bool {
        true
    }
}
