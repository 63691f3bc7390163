//! The three user actions exposed to the rendering shell.
//!
//! Each action wires the configured providers into the orchestration layer
//! and returns either a structured result or an [`AppError`]; nothing
//! propagates past this boundary. The shell shows [`display_error`]'s string
//! and waits for the user to re-trigger the action - there are no automatic
//! retries anywhere.

use std::fs;
use std::path::Path;

use cr_core::error::AppError;
use cr_net::analysis::{
    analyze_process, search_policies, ComplianceReport, PolicySearchOutcome,
    DEFAULT_ANALYSIS_TIMEOUT,
};
use cr_net::search::HttpPolicySearch;
use cr_net::sentinel::{ScanReport, SentinelClient};
use cr_net::summarize::HttpSummarizer;

use crate::config::AppConfig;

/// Analyze a free-text process description: policy search, summarization and
/// verdict/section post-processing under one 60-second deadline.
pub fn run_compliance_analysis(
    cfg: &AppConfig,
    description: &str,
) -> Result<ComplianceReport, AppError> {
    let search = HttpPolicySearch::new(&cfg.search_base_url, cfg.search_api_key.clone())?;
    let summarizer = HttpSummarizer::new(
        &cfg.chat_base_url,
        cfg.chat_api_key.clone(),
        cfg.chat_model.clone(),
    )?;
    analyze_process(&search, &summarizer, description, DEFAULT_ANALYSIS_TIMEOUT)
}

/// Search policy documents across the selected domain categories.
pub fn run_policy_search(
    cfg: &AppConfig,
    query: &str,
    selected_category_ids: &[String],
) -> Result<PolicySearchOutcome, AppError> {
    let search = HttpPolicySearch::new(&cfg.search_base_url, cfg.search_api_key.clone())?;
    search_policies(&search, query, selected_category_ids)
}

/// Upload a captured-traffic metrics file for threat classification.
///
/// The file is read from disk and passed through unmodified; the backend owns
/// every judgement about its content.
pub fn run_traffic_scan(
    cfg: &AppConfig,
    capture_path: &Path,
    username: Option<&str>,
) -> Result<ScanReport, AppError> {
    let bytes = fs::read(capture_path).map_err(|e| {
        AppError::new("SCAN_READ_FAILED", "Failed to read the selected capture file")
            .with_details(format!("path={}; err={e}", capture_path.display()))
    })?;
    let file_name = capture_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("capture.json");

    let client = SentinelClient::new(&cfg.sentinel_base_url)?;
    client.scan_capture(file_name, &bytes, username)
}

/// The single human-readable string the page shows for a failed action.
pub fn display_error(err: &AppError) -> String {
    err.message.clone()
}
