use std::collections::HashMap;

use concierge::presentation::{Environment, Settings};

fn load_with(vars: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::load_from(Environment::Test, |name| vars.get(name).cloned()).unwrap()
}

#[test]
fn given_no_overrides_when_loading_then_uses_defaults() {
    let settings = load_with(&[]);

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(
        settings.llm.endpoint,
        "https://openrouter.ai/api/v1/chat/completions"
    );
    assert_eq!(settings.llm.model, "gpt-3.5-turbo");
    assert_eq!(settings.llm.timeout_seconds, 60);
    assert!(settings.llm.api_key.is_empty());
    assert_eq!(settings.session.history_window, 6);
    assert_eq!(settings.extraction.max_upload_mb, 20);
    assert_eq!(settings.extraction.max_upload_bytes(), 20 * 1024 * 1024);
    assert_eq!(settings.extraction.max_prompt_chars, 16_000);
    assert!(settings.extraction.pdf.enabled);
}

#[test]
fn given_legacy_variables_when_loading_then_they_override_defaults() {
    let settings = load_with(&[
        ("OPENROUTER_API_KEY", "sk-test"),
        ("OPENROUTER_URL", "http://localhost:9999/v1/chat/completions"),
        ("OPENROUTER_MODEL", "mistral-small"),
        ("MAX_UPLOAD_MB", "5"),
        ("MAX_PROMPT_CHARS", "8000"),
        ("SERVER_PORT", "8080"),
    ]);

    assert_eq!(settings.llm.api_key, "sk-test");
    assert_eq!(
        settings.llm.endpoint,
        "http://localhost:9999/v1/chat/completions"
    );
    assert_eq!(settings.llm.model, "mistral-small");
    assert_eq!(settings.extraction.max_upload_bytes(), 5 * 1024 * 1024);
    assert_eq!(settings.extraction.max_prompt_chars, 8000);
    assert_eq!(settings.server.port, 8080);
}

#[test]
fn given_blank_legacy_variable_when_loading_then_keeps_default() {
    let settings = load_with(&[("OPENROUTER_MODEL", "   ")]);

    assert_eq!(settings.llm.model, "gpt-3.5-turbo");
}

#[test]
fn given_non_numeric_port_when_loading_then_returns_error() {
    let result = Settings::load_from(Environment::Test, |name| {
        (name == "SERVER_PORT").then(|| "not-a-port".to_string())
    });

    assert!(result.is_err());
}
