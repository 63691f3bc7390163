//! Presentation-facing taxonomy for upstream failures.
//!
//! Every non-2xx response and every transport failure is folded into one
//! structured [`AppError`] here. The mapping is terminal for the current
//! attempt: nothing in this module retries, and callers are expected to show
//! the message and wait for the user to re-trigger the action.

use cr_core::error::AppError;

/// Indicators that a 403/503 body is a Cloudflare challenge page rather than
/// a real upstream response.
const CHALLENGE_MARKERS: [&str; 5] = [
    "attention required! | cloudflare",
    "please turn javascript on",
    "please enable cookies",
    "ray id:",
    "cdn-cgi",
];

pub(crate) fn is_challenge_page(body: &str) -> bool {
    let lower = body.to_lowercase();
    CHALLENGE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Pull the human-readable message out of an upstream error body.
///
/// Understands FastAPI bodies (`{"detail": …}`) and OpenAI-style bodies
/// (`{"error": {"message": …}}`); anything else falls back to the raw body
/// text when non-empty.
pub(crate) fn upstream_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
            return Some(detail.to_string());
        }
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
        {
            return Some(message.to_string());
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Classify a non-2xx upstream response by status code.
pub fn map_upstream_status(status: u16, body: &str) -> AppError {
    if matches!(status, 403 | 503) && is_challenge_page(body) {
        return AppError::new(
            "UPSTREAM_RESTRICTED",
            "Access to the service is temporarily restricted. Try again in a few minutes",
        )
        .with_retryable(true);
    }

    match status {
        401 => AppError::new(
            "AUTH_FAILED",
            "API authentication failed. Check the API key configuration",
        ),
        400 => AppError::new(
            "BAD_INPUT",
            upstream_message(body)
                .unwrap_or_else(|| "The request was rejected by the service".to_string()),
        ),
        504 => AppError::new(
            "UPSTREAM_TIMEOUT",
            "The service timed out while processing the request",
        )
        .with_retryable(true),
        503 => AppError::new(
            "UPSTREAM_BUSY",
            "The service is temporarily busy. Wait a moment and retry",
        )
        .with_retryable(true),
        500 => {
            let message = upstream_message(body);
            let lower = message.as_deref().unwrap_or("").to_lowercase();
            if lower.contains("configuration") || lower.contains("api key") {
                AppError::new(
                    "SERVER_CONFIG",
                    message.unwrap_or_else(|| "The service is misconfigured".to_string()),
                )
            } else if lower.contains("rate limit") {
                AppError::new(
                    "RATE_LIMITED",
                    message.unwrap_or_else(|| "Rate limit reached".to_string()),
                )
                .with_retryable(true)
            } else {
                AppError::new(
                    "SERVER_ERROR",
                    message
                        .unwrap_or_else(|| "The service failed to process the request".to_string()),
                )
            }
        }
        other => AppError::new(
            "UPSTREAM_UNKNOWN",
            upstream_message(body).unwrap_or_else(|| {
                "Unable to reach the service. Check the connection and try again".to_string()
            }),
        )
        .with_details(format!("status={other}")),
    }
}

fn transport_is_timeout(err: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(current) = source {
        if let Some(io) = current.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ) {
                return true;
            }
        }
        source = current.source();
    }
    false
}

/// Classify a transport-level failure (no HTTP status available).
///
/// Socket timeouts keep a dedicated code so the analysis flow can replace
/// them with its deadline guidance; everything else is a generic
/// connectivity error.
pub fn map_transport_error(provider: &str, err: &ureq::Transport) -> AppError {
    if transport_is_timeout(err) {
        AppError::new("REQUEST_TIMED_OUT", format!("The {provider} request timed out"))
            .with_details(err.to_string())
    } else {
        AppError::new(
            "UPSTREAM_UNREACHABLE",
            format!("Unable to reach the {provider}. Check the connection and try again"),
        )
        .with_details(err.to_string())
        .with_retryable(true)
    }
}

/// Fold a finished `ureq` call into either the 2xx response or a classified
/// [`AppError`].
pub(crate) fn dispatch(
    provider: &str,
    result: Result<ureq::Response, ureq::Error>,
) -> Result<ureq::Response, AppError> {
    match result {
        Ok(resp) => Ok(resp),
        Err(ureq::Error::Status(code, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Err(map_upstream_status(code, &body))
        }
        Err(ureq::Error::Transport(t)) => Err(map_transport_error(provider, &t)),
    }
}
