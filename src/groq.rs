//! Inference API client construction.
//!
//! Groq exposes an OpenAI-compatible chat completions endpoint, so the client
//! is a stock async-openai client pointed at the Groq base URL. The credential
//! comes from the process environment; when it is missing the server still
//! starts, with analysis disabled.

use crate::config::InferenceSettings;
use async_openai::{config::OpenAIConfig, Client};
use tracing::warn;

/// Create an inference client from settings, or `None` when no credential is
/// configured.
pub fn create_client(settings: &InferenceSettings) -> Option<Client<OpenAIConfig>> {
    let api_key = match std::env::var(&settings.api_key_env) {
        Ok(raw) => trim_credential(&raw),
        Err(_) => String::new(),
    };

    if api_key.is_empty() {
        warn!(
            "{} not set; analysis is disabled until a credential is configured",
            settings.api_key_env
        );
        return None;
    }

    let config = OpenAIConfig::new()
        .with_api_base(&settings.api_base)
        .with_api_key(api_key);

    Some(Client::with_config(config))
}

/// Trim whitespace and surrounding quote/apostrophe characters from a
/// credential. Keys pasted into `.env` files often arrive quoted.
pub fn trim_credential(raw: &str) -> String {
    raw.trim().trim_matches(['\'', '"']).trim().to_string()
}
