use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;

use cr_app::actions::{run_traffic_scan, display_error};
use cr_app::config::{AppConfig, DEFAULT_SENTINEL_BASE_URL};
use cr_core::error::AppError;

fn test_config() -> AppConfig {
    AppConfig {
        search_base_url: "https://search.test".to_string(),
        search_api_key: "sk-search".to_string(),
        chat_base_url: "https://chat.test/v1".to_string(),
        chat_api_key: "sk-chat".to_string(),
        chat_model: "test-model".to_string(),
        sentinel_base_url: DEFAULT_SENTINEL_BASE_URL.to_string(),
    }
}

#[test]
fn traffic_scan_fails_locally_when_the_file_is_unreadable() {
    let cfg = test_config();
    let err = run_traffic_scan(&cfg, Path::new("/nonexistent/capture.json"), None)
        .expect_err("should error");
    assert_eq!(err.code, "SCAN_READ_FAILED");
    assert!(err.details.as_deref().unwrap_or("").contains("capture.json"));
}

#[test]
fn traffic_scan_rejects_an_invalid_sentinel_base_url() {
    let mut cfg = test_config();
    cfg.sentinel_base_url = "not-a-url".to_string();

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"[1,2,3,4,5,6,7,8,9,10]").expect("write");

    let err = run_traffic_scan(&cfg, file.path(), Some("alice")).expect_err("should error");
    assert_eq!(err.code, "ENDPOINT_INVALID");
}

#[test]
fn display_error_is_message_only() {
    let err = AppError::new(
        "ANALYSIS_TIMEOUT",
        "Analysis took too long. The process is likely too complex - try splitting the description into smaller, more focused parts",
    )
    .with_details("io: timed out");
    let shown = display_error(&err);
    assert!(shown.contains("splitting"));
    assert!(!shown.contains("io: timed out"));
    assert!(!shown.contains("ANALYSIS_TIMEOUT"));
}

#[test]
fn config_requires_provider_credentials() {
    // Single test touching the process environment; env mutation is not
    // thread-safe across tests, so the missing-key and happy paths run
    // sequentially here.
    std::env::remove_var("TAVILY_API_KEY");
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_MODEL_NAME");
    std::env::remove_var("COMPLYRADAR_SEARCH_BASE_URL");
    std::env::remove_var("COMPLYRADAR_CHAT_BASE_URL");
    std::env::remove_var("COMPLYRADAR_SENTINEL_BASE_URL");

    let err = AppConfig::from_env().expect_err("should error");
    assert_eq!(err.code, "SERVER_CONFIG");
    assert!(err.message.contains("configuration"));

    std::env::set_var("TAVILY_API_KEY", "tv-key");
    std::env::set_var("OPENAI_API_KEY", "sk-key");
    std::env::set_var("OPENAI_MODEL_NAME", "gpt-test");

    let cfg = AppConfig::from_env().expect("config loads");
    assert_eq!(cfg.search_api_key, "tv-key");
    assert_eq!(cfg.chat_model, "gpt-test");
    assert_eq!(cfg.sentinel_base_url, DEFAULT_SENTINEL_BASE_URL);

    std::env::remove_var("TAVILY_API_KEY");
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_MODEL_NAME");
}
