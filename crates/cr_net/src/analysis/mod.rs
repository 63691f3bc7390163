//! Orchestration of the two user-facing compliance operations.
//!
//! `analyze_process` runs the full pipeline (policy search, then
//! summarization, then verdict/section post-processing) under one overall
//! deadline. `search_policies` is the standalone domain-scoped search. Both
//! fail fast on invalid input, before any provider call.

use std::time::{Duration, Instant};

use cr_core::domains::{resolve_categories, DomainCategory};
use cr_core::error::AppError;
use cr_core::sections::{extract_findings, extract_recommendations};
use cr_core::validate::validate_process_description;
use cr_core::verdict::{classify_verdict, ComplianceVerdict};
use serde::{Deserialize, Serialize};

use crate::search::{PolicyHit, PolicySearch};
use crate::summarize::Summarizer;

mod prompts;

/// Overall wall-clock budget for one analysis action, covering both provider
/// calls.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Everything the page needs to render one finished analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceReport {
    pub verdict: ComplianceVerdict,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub sources: Vec<PolicyHit>,
}

/// Result of a standalone policy search action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicySearchOutcome {
    pub query: String,
    pub domains: Vec<String>,
    pub policies: Vec<PolicyHit>,
}

/// Remaining wall-clock budget for the analysis pipeline. Each provider call
/// gets whatever is left as its transport timeout; an exhausted budget
/// between calls fails the same way a mid-call timeout does.
struct Budget {
    deadline: Instant,
}

impl Budget {
    fn new(total: Duration) -> Self {
        Self {
            deadline: Instant::now() + total,
        }
    }

    fn remaining(&self) -> Result<Duration, AppError> {
        let left = self.deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            Err(deadline_error())
        } else {
            Ok(left)
        }
    }
}

fn deadline_error() -> AppError {
    AppError::new(
        "ANALYSIS_TIMEOUT",
        "Analysis took too long. The process is likely too complex - try splitting the description into smaller, more focused parts",
    )
}

/// A socket timeout inside a provider call means the overall deadline fired;
/// surface it as the analysis deadline with remediation guidance instead of a
/// raw timeout.
fn remap_deadline(err: AppError) -> AppError {
    if err.code == "REQUEST_TIMED_OUT" {
        let mapped = deadline_error();
        match err.details {
            Some(details) => mapped.with_details(details),
            None => mapped,
        }
    } else {
        err
    }
}

fn full_allow_list() -> Vec<String> {
    let ids: Vec<String> = DomainCategory::ALL
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    // The full catalog always resolves.
    resolve_categories(&ids).unwrap_or_default()
}

/// Run one compliance analysis: search the full policy allow-list for the
/// described process, feed the hits into the summarizer, and post-process the
/// reply into a verdict plus findings/recommendations.
///
/// The two provider calls run sequentially under `overall_timeout`. No
/// partial result is produced and nothing is retried; deadline expiry is
/// reported as `ANALYSIS_TIMEOUT`.
pub fn analyze_process(
    search: &dyn PolicySearch,
    summarizer: &dyn Summarizer,
    description: &str,
    overall_timeout: Duration,
) -> Result<ComplianceReport, AppError> {
    validate_process_description(description)?;

    let budget = Budget::new(overall_timeout);
    let domains = full_allow_list();

    let hits = search
        .search(description, &domains, Some(budget.remaining()?))
        .map_err(remap_deadline)?;

    let prompt = prompts::compliance_analysis_prompt(description, &hits);
    let reply = summarizer
        .complete(
            prompts::COMPLIANCE_SYSTEM_PROMPT,
            &prompt,
            Some(budget.remaining()?),
        )
        .map_err(remap_deadline)?;

    Ok(ComplianceReport {
        verdict: classify_verdict(&reply),
        findings: extract_findings(&reply),
        recommendations: extract_recommendations(&reply),
        sources: hits,
    })
}

/// Run one standalone policy search over the selected domain categories.
///
/// No client-side timeout is applied; the transport default carries the call.
pub fn search_policies(
    search: &dyn PolicySearch,
    query: &str,
    category_ids: &[String],
) -> Result<PolicySearchOutcome, AppError> {
    let domains = resolve_categories(category_ids)?;
    let policies = search.search(query, &domains, None)?;
    Ok(PolicySearchOutcome {
        query: query.to_string(),
        domains,
        policies,
    })
}
