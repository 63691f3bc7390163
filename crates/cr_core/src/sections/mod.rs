//! Heuristic line-scanning over free-form summarizer output.
//!
//! The summarizer returns unstructured text; the only assumption made here is
//! that line-splitting is meaningful. Two passes with swapped keyword roles
//! recover a "findings" list and a "recommendations" list.

/// Placeholder entry used when a scan recovers nothing. Callers always get at
/// least one line to render.
pub const NO_FINDINGS_PLACEHOLDER: &str = "No specific findings available";
pub const NO_RECOMMENDATIONS_PLACEHOLDER: &str = "No specific recommendations available";

fn is_bullet_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('\u{2022}') || trimmed.starts_with('-')
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '\u{2022}' || c == '-' || c.is_whitespace())
        .trim_end()
}

/// Extract one heuristic section from an analysis reply.
///
/// Scans line by line with an "in section" flag:
/// - a line already in-section that contains `stop_keyword` terminates the
///   scan; the stopping line is dropped even when it is itself bulleted;
/// - a line containing `section_keyword`, or starting with a bullet marker
///   (`•` / `-`), enters the section; its cleaned form is appended unless it
///   is empty or contains `exclusion_keyword`.
///
/// The bullet branch is intentionally not gated on the section keyword having
/// been seen: bullets anywhere in the text are captured, including ones from
/// unrelated paragraphs.
///
/// All keyword matching is case-insensitive; keywords are expected to be
/// lowercase. Pure function, never fails, and never returns an empty list:
/// an empty scan result is replaced by a single `placeholder` entry.
pub fn extract_section(
    text: &str,
    section_keyword: &str,
    stop_keyword: Option<&str>,
    exclusion_keyword: &str,
    placeholder: &str,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let lower = line.to_lowercase();

        if in_section {
            if let Some(stop) = stop_keyword {
                if lower.contains(stop) {
                    break;
                }
            }
        }

        if lower.contains(section_keyword) || is_bullet_line(line) {
            in_section = true;
            let cleaned = strip_bullet(line);
            if !cleaned.is_empty() && !cleaned.to_lowercase().contains(exclusion_keyword) {
                out.push(cleaned.to_string());
            }
        }
    }

    if out.is_empty() {
        out.push(placeholder.to_string());
    }
    out
}

/// Findings pass: keyed on "finding", stops at the first recommendation talk.
pub fn extract_findings(text: &str) -> Vec<String> {
    extract_section(
        text,
        "finding",
        Some("recommendation"),
        "recommendation",
        NO_FINDINGS_PLACEHOLDER,
    )
}

/// Recommendations pass: keyed on "recommendation", scans to the end.
pub fn extract_recommendations(text: &str) -> Vec<String> {
    extract_section(text, "recommendation", None, "finding", NO_RECOMMENDATIONS_PLACEHOLDER)
}
