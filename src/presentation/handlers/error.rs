use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::LlmClientError;
use crate::application::services::{ChatError, SummaryError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Every failure the HTTP surface can report. Rendered as `{error, message[, status]}`.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    PayloadTooLarge(String),
    UnsupportedFormat(String),
    ExtractionFailed(String),
    EmptyDocument(String),
    Provider(LlmClientError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::PayloadTooLarge(_) => "PayloadTooLarge",
            ApiError::UnsupportedFormat(_) => "UnsupportedFormat",
            ApiError::ExtractionFailed(_) => "ExtractionFailed",
            ApiError::EmptyDocument(_) => "EmptyDocument",
            ApiError::Provider(LlmClientError::EmptyPrompt) => "InternalError",
            ApiError::Provider(e) => e.kind(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::EmptyDocument(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Provider(e) => match e {
                LlmClientError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
                LlmClientError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
                LlmClientError::EmptyPrompt => StatusCode::INTERNAL_SERVER_ERROR,
                LlmClientError::AuthenticationFailed { .. }
                | LlmClientError::ProviderError { .. }
                | LlmClientError::RequestFailed(_)
                | LlmClientError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(m)
            | ApiError::PayloadTooLarge(m)
            | ApiError::UnsupportedFormat(m)
            | ApiError::ExtractionFailed(m)
            | ApiError::EmptyDocument(m) => m.clone(),
            ApiError::Provider(e) => e.to_string(),
        }
    }

    fn provider_status(&self) -> Option<u16> {
        match self {
            ApiError::Provider(LlmClientError::ProviderError { status, .. })
            | ApiError::Provider(LlmClientError::AuthenticationFailed { status }) => Some(*status),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = self.kind(), detail = %self.message(), "Request failed");
        } else {
            tracing::warn!(error = self.kind(), detail = %self.message(), "Request rejected");
        }

        let body = ErrorResponse {
            error: self.kind(),
            message: self.message(),
            status: self.provider_status(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<LlmClientError> for ApiError {
    fn from(error: LlmClientError) -> Self {
        ApiError::Provider(error)
    }
}

impl From<ChatError> for ApiError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::EmptyMessage => ApiError::Validation("Empty message".to_string()),
            ChatError::Completion(e) => e.into(),
        }
    }
}

impl From<SummaryError> for ApiError {
    fn from(error: SummaryError) -> Self {
        let message = error.to_string();
        match error {
            SummaryError::PayloadTooLarge { .. } => ApiError::PayloadTooLarge(message),
            SummaryError::UnsupportedFormat(detail) => ApiError::UnsupportedFormat(detail),
            SummaryError::ExtractionFailed(_) => ApiError::ExtractionFailed(message),
            SummaryError::EmptyDocument(_) => ApiError::EmptyDocument(message),
            SummaryError::Completion(e) => e.into(),
        }
    }
}
