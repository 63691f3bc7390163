use crate::search::PolicyHit;

pub(crate) const COMPLIANCE_SYSTEM_PROMPT: &str = "You are a compliance expert. Analyze the technical process and identify key regulations. Be concise and focused.";

/// User prompt for the compliance analysis completion, embedding the policy
/// search hits as numbered blocks. The reply format is nudged toward the
/// headings and bullets the downstream extractor keys on, but nothing is
/// guaranteed: the extractor must tolerate arbitrary text.
pub(crate) fn compliance_analysis_prompt(process: &str, hits: &[PolicyHit]) -> String {
    let policy_blocks = if hits.is_empty() {
        "(no policy documents were found)".to_string()
    } else {
        hits.iter()
            .enumerate()
            .map(|(i, hit)| format!("{}. {} ({})\n{}", i + 1, hit.title, hit.url, hit.snippet))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!(
        r#"Assess the following technical process for regulatory compliance.

Technical process:
{process}

Relevant policy documents:
{policy_blocks}

Output:
- Start with a one-sentence overall assessment stating whether the process is compliant or not compliant.
- Then a "Findings:" section as a bulleted list of concrete observations.
- Then a "Recommendations:" section as a bulleted list of action items.
"#
    )
}
