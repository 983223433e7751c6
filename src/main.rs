use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use concierge::application::ports::SessionStore;
use concierge::application::services::{
    ChatService, PromptBuilder, SummaryService, UploadLimits,
};
use concierge::infrastructure::llm::OpenAiClient;
use concierge::infrastructure::observability::{TracingConfig, init_tracing};
use concierge::infrastructure::persistence::InMemorySessionStore;
use concierge::infrastructure::text_processing::ExtractorFactory;
use concierge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let llm_client = Arc::new(OpenAiClient::new(
        &settings.llm.endpoint,
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        Duration::from_secs(settings.llm.timeout_seconds),
    ));
    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction.pdf));
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let prompt_builder = PromptBuilder::new(
        settings.llm.system_prompt.clone(),
        settings.session.history_window,
    );

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&llm_client),
        session_store,
        prompt_builder.clone(),
    ));

    let summary_service = Arc::new(SummaryService::new(
        file_loader,
        Arc::clone(&llm_client),
        prompt_builder,
        UploadLimits {
            max_upload_bytes: settings.extraction.max_upload_bytes(),
            max_prompt_chars: settings.extraction.max_prompt_chars,
        },
    ));

    tracing::info!(
        endpoint = %settings.llm.endpoint,
        model = %settings.llm.model,
        ai_connected = !settings.llm.api_key.trim().is_empty(),
        pdf_support = summary_service.supports_pdf(),
        max_upload_mb = settings.extraction.max_upload_mb,
        "Concierge configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let state = AppState {
        chat_service,
        summary_service,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
