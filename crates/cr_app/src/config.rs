use std::env;

use cr_core::error::AppError;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.tavily.com";
pub const DEFAULT_CHAT_BASE_URL: &str = "https://litellm.deriv.ai/v1";
pub const DEFAULT_SENTINEL_BASE_URL: &str = "http://127.0.0.1:8000";

/// Provider endpoints and credentials, loaded once at startup.
///
/// Base URLs have deployment defaults; the credentials and model name must be
/// present in the environment. Nothing else in the engine is
/// environment-driven.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_base_url: String,
    pub search_api_key: String,
    pub chat_base_url: String,
    pub chat_api_key: String,
    pub chat_model: String,
    pub sentinel_base_url: String,
}

fn require_env(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::new(
            "SERVER_CONFIG",
            "API configuration error: missing required API keys or model name",
        )
        .with_details(format!("var={name}"))),
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            search_base_url: env_or("COMPLYRADAR_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL),
            search_api_key: require_env("TAVILY_API_KEY")?,
            chat_base_url: env_or("COMPLYRADAR_CHAT_BASE_URL", DEFAULT_CHAT_BASE_URL),
            chat_api_key: require_env("OPENAI_API_KEY")?,
            chat_model: require_env("OPENAI_MODEL_NAME")?,
            sentinel_base_url: env_or("COMPLYRADAR_SENTINEL_BASE_URL", DEFAULT_SENTINEL_BASE_URL),
        })
    }
}
