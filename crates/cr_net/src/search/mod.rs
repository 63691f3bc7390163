use std::time::Duration;

use cr_core::error::AppError;
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::status;

/// One policy document returned by the search provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub relevance_score: f64,
}

/// Seam over the search provider so orchestration can be exercised with
/// in-memory fakes.
pub trait PolicySearch {
    fn search(
        &self,
        query: &str,
        domains: &[String],
        timeout: Option<Duration>,
    ) -> Result<Vec<PolicyHit>, AppError>;
}

/// HTTP client for the Tavily-style search provider.
#[derive(Debug, Clone)]
pub struct HttpPolicySearch {
    endpoint: Endpoint,
    api_key: String,
}

impl HttpPolicySearch {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, AppError> {
        Ok(Self {
            endpoint: Endpoint::new(base_url)?,
            api_key: api_key.into(),
        })
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: String,
    search_depth: &'static str,
    max_results: u32,
    include_answer: bool,
    include_raw_content: bool,
    include_domains: &'a [String],
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    title: Option<String>,
    url: Option<String>,
    snippet: Option<String>,
    content: Option<String>,
    score: Option<f64>,
}

/// Scope the free-text query to the allow-listed domains with `site:`
/// operators, e.g. `(gdpr retention) (site:.europa.eu OR site:.gov)`.
/// Bare domains get a leading dot so subdomains match too; a domain given
/// with a leading dot already covers subdomains and is used bare.
pub(crate) fn scoped_query(query: &str, domains: &[String]) -> String {
    let parts: Vec<String> = domains
        .iter()
        .map(|d| match d.strip_prefix('.') {
            Some(bare) => format!("site:{bare}"),
            None => format!("site:.{d}"),
        })
        .collect();
    format!("({query}) ({})", parts.join(" OR "))
}

impl PolicySearch for HttpPolicySearch {
    fn search(
        &self,
        query: &str,
        domains: &[String],
        timeout: Option<Duration>,
    ) -> Result<Vec<PolicyHit>, AppError> {
        let req = SearchRequest {
            query: scoped_query(query, domains),
            search_depth: "advanced",
            max_results: 10,
            include_answer: false,
            include_raw_content: false,
            include_domains: domains,
        };

        let mut request = ureq::post(&self.endpoint.join("/search"))
            .set("Authorization", &format!("Bearer {}", self.api_key));
        if let Some(t) = timeout {
            request = request.timeout(t);
        }

        let payload = serde_json::to_value(req).map_err(|e| {
            AppError::new("SEARCH_FAILED", "Failed to encode policy search request")
                .with_details(e.to_string())
        })?;
        let resp = status::dispatch("policy search provider", request.send_json(payload))?;
        let parsed: SearchResponse = resp.into_json().map_err(|e| {
            AppError::new("SEARCH_FAILED", "Failed to decode policy search response")
                .with_details(e.to_string())
        })?;

        // Provider order is preserved as-is (assumed relevance-descending);
        // entries without a usable title or URL are skipped and duplicate
        // URLs keep their first occurrence.
        let mut hits: Vec<PolicyHit> = Vec::new();
        for raw in parsed.results {
            let (Some(title), Some(url)) = (raw.title, raw.url) else {
                continue;
            };
            if title.is_empty() || url.is_empty() || hits.iter().any(|h| h.url == url) {
                continue;
            }
            let snippet = raw.snippet.or(raw.content).unwrap_or_default();
            hits.push(PolicyHit {
                title,
                url,
                snippet,
                relevance_score: raw.score.unwrap_or(0.0),
            });
        }
        Ok(hits)
    }
}
