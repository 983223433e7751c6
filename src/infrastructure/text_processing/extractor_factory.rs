use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::ContentType;
use crate::presentation::config::PdfExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::pdf_support::PdfSupport;
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds the upload loader: plain text always, PDF according to the detected capability.
    pub fn create(settings: &PdfExtractionSettings) -> CompositeFileLoader {
        let pdf = PdfSupport::detect(settings.enabled);
        tracing::info!(pdf_available = pdf.is_available(), "Text extractors configured");

        let text_loader: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf_loader: Arc<dyn FileLoader> = Arc::new(pdf);

        CompositeFileLoader::new(vec![
            (ContentType::Text, text_loader),
            (ContentType::Pdf, pdf_loader),
        ])
    }
}
