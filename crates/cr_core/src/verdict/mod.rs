use serde::{Deserialize, Serialize};

/// Coarse compliance verdict derived from a free-text analysis reply.
///
/// The upstream summarizer gives no structured contract, so the verdict is a
/// substring heuristic over its natural-language output. Recomputed per
/// request, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceVerdict {
    LikelyCompliant,
    LikelyNonCompliant,
    Unclear,
}

impl ComplianceVerdict {
    /// Short display label for the page.
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceVerdict::LikelyCompliant => "Likely compliant",
            ComplianceVerdict::LikelyNonCompliant => "Likely non-compliant",
            ComplianceVerdict::Unclear => "Unclear",
        }
    }
}

/// Classify an analysis reply into a three-way verdict.
///
/// Case-insensitive substring containment, first match wins. The negative
/// phrases are checked before the bare "compliant" so that text containing
/// "not compliant" never falls through to the positive branch. Do not
/// reorder.
pub fn classify_verdict(text: &str) -> ComplianceVerdict {
    let lower = text.to_lowercase();
    if lower.contains("not compliant") || lower.contains("non-compliant") {
        ComplianceVerdict::LikelyNonCompliant
    } else if lower.contains("compliant") {
        ComplianceVerdict::LikelyCompliant
    } else {
        ComplianceVerdict::Unclear
    }
}
