use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Field, Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::UploadedDocument;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub title: String,
    pub bullets: Vec<String>,
    pub action: String,
    pub keywords: Vec<String>,
    pub filename: String,
    pub char_count: usize,
    pub word_count: usize,
    pub truncated: bool,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let mut multipart = multipart.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::Validation(rejection.body_text())
        }
    })?;
    let limit = state.summary_service.limits().max_upload_bytes;

    let document = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
            .ok_or_else(|| ApiError::Validation("No file part".to_string()))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.trim().is_empty() {
            return Err(ApiError::Validation("No selected file".to_string()));
        }

        tracing::debug!(filename = %filename, "Receiving upload");
        let data = read_bounded(field, limit).await?;
        break UploadedDocument::new(filename, data);
    };

    let result = state.summary_service.summarize(&document).await?;

    Ok(Json(UploadResponse {
        title: result.summary.title,
        bullets: result.summary.bullets,
        action: result.summary.action,
        keywords: result.summary.keywords,
        filename: result.filename,
        char_count: result.char_count,
        word_count: result.word_count,
        truncated: result.truncated,
    }))
}

/// Buffers the field, giving up as soon as it grows past `limit` bytes.
async fn read_bounded(mut field: Field<'_>, limit: u64) -> Result<Vec<u8>, ApiError> {
    let mut data = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if (data.len() + chunk.len()) as u64 > limit {
            return Err(ApiError::PayloadTooLarge(format!(
                "upload exceeds the {limit} byte limit"
            )));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

fn multipart_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(error.body_text())
    } else {
        ApiError::Validation(format!("Failed to read multipart: {}", error.body_text()))
    }
}
