mod composite_file_loader;
mod extractor_factory;
mod mock_file_loader;
#[cfg(feature = "pdf")]
mod pdf_adapter;
mod pdf_support;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::ExtractorFactory;
pub use mock_file_loader::MockFileLoader;
#[cfg(feature = "pdf")]
pub use pdf_adapter::PdfAdapter;
pub use pdf_support::{PDF_UNAVAILABLE_MESSAGE, PdfSupport};
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
