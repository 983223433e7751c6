use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{ExtractedText, Summary, UploadedDocument};

use super::prompt_builder::PromptBuilder;
use super::response_formatter::{parse_keywords, parse_summary};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 16_000;

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_upload_bytes: u64,
    pub max_prompt_chars: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

pub struct SummaryService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    prompt_builder: PromptBuilder,
    limits: UploadLimits,
}

impl<F, L> SummaryService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        prompt_builder: PromptBuilder,
        limits: UploadLimits,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            prompt_builder,
            limits,
        }
    }

    pub fn limits(&self) -> UploadLimits {
        self.limits
    }

    pub fn supports_pdf(&self) -> bool {
        self.file_loader.supports_pdf()
    }

    #[tracing::instrument(
        skip(self, document),
        fields(filename = %document.filename, size_bytes = document.size_bytes())
    )]
    pub async fn summarize(
        &self,
        document: &UploadedDocument,
    ) -> Result<DocumentSummary, SummaryError> {
        if document.size_bytes() > self.limits.max_upload_bytes {
            return Err(SummaryError::PayloadTooLarge {
                size_bytes: document.size_bytes(),
                limit_bytes: self.limits.max_upload_bytes,
            });
        }

        if document.content_type().is_none() {
            return Err(SummaryError::UnsupportedFormat(format!(
                "'.{}' files are not supported; upload a .pdf or .txt file",
                document.extension
            )));
        }

        let raw_text = self.file_loader.extract_text(document).await?;
        let extracted = ExtractedText::capped(raw_text, self.limits.max_prompt_chars);

        if extracted.is_blank() {
            return Err(SummaryError::EmptyDocument(document.filename.clone()));
        }

        tracing::debug!(
            char_count = extracted.char_count,
            word_count = extracted.word_count,
            truncated = extracted.truncated,
            "Document text extracted"
        );

        let summary_request = self.prompt_builder.summarize(&extracted);
        let reply = self.llm_client.complete(&summary_request).await?;
        let summary = parse_summary(&reply);

        let keywords_request = self.prompt_builder.keywords(&extracted);
        let keywords = match self.llm_client.complete(&keywords_request).await {
            Ok(reply) => parse_keywords(&reply),
            Err(e) => {
                tracing::warn!(error = %e, "Keyword extraction failed, returning summary without keywords");
                Vec::new()
            }
        };

        tracing::info!(
            bullets = summary.bullets.len(),
            keywords = keywords.len(),
            "Document summarized"
        );

        Ok(DocumentSummary {
            filename: document.filename.clone(),
            summary: summary.with_keywords(keywords),
            char_count: extracted.char_count,
            word_count: extracted.word_count,
            truncated: extracted.truncated,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub filename: String,
    pub summary: Summary,
    pub char_count: usize,
    pub word_count: usize,
    pub truncated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("upload of {size_bytes} bytes exceeds the {limit_bytes} byte limit")]
    PayloadTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("could not extract text: {0}")]
    ExtractionFailed(String),
    #[error("no text could be extracted from {0}")]
    EmptyDocument(String),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}

impl From<FileLoaderError> for SummaryError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::UnsupportedFormat(detail) => Self::UnsupportedFormat(detail),
            FileLoaderError::ExtractionFailed(detail) => Self::ExtractionFailed(detail),
        }
    }
}
