use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use crate::application::services::{
    DEFAULT_HISTORY_WINDOW, DEFAULT_MAX_PROMPT_CHARS, DEFAULT_SYSTEM_PROMPT,
};
use crate::infrastructure::llm::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};

use super::Environment;

/// Unprefixed variables accepted for existing deployments, mapped onto settings keys.
const LEGACY_OVERRIDES: [(&str, &str); 6] = [
    ("OPENROUTER_API_KEY", "llm.api_key"),
    ("OPENROUTER_URL", "llm.endpoint"),
    ("OPENROUTER_MODEL", "llm.model"),
    ("MAX_UPLOAD_MB", "extraction.max_upload_mb"),
    ("MAX_PROMPT_CHARS", "extraction.max_prompt_chars"),
    ("SERVER_PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub session: SessionSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub system_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Prior turns replayed to the provider; zero replays the whole history.
    pub history_window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub max_upload_mb: u64,
    pub max_prompt_chars: usize,
    pub pdf: PdfExtractionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExtractionSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_upload_mb: 20,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            pdf: PdfExtractionSettings { enabled: true },
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,concierge=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}

impl ExtractionSettings {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, `appsettings.{env}` (optional),
    /// `APP_`-prefixed variables (`APP_LLM__API_KEY`), then the legacy variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, |name| std::env::var(name).ok())
    }

    /// Same as [`Settings::load`] with legacy variables resolved through `lookup`.
    pub fn load_from(
        environment: Environment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        for (variable, key) in LEGACY_OVERRIDES {
            let value = lookup(variable).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}
