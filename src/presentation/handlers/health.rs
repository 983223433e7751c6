use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_connectivity: &'static str,
    pub pdf_support: bool,
    pub model: String,
}

/// Always answers 200; a missing credential is reported in the body.
pub async fn health_handler<F, L>(State(state): State<AppState<F, L>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let ai_connectivity = if state.chat_service.provider_configured() {
        "configured"
    } else {
        "missing_credential"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            ai_connectivity,
            pdf_support: state.summary_service.supports_pdf(),
            model: state.chat_service.model().to_string(),
        }),
    )
}
