use pretty_assertions::assert_eq;

use cr_net::status::map_upstream_status;

#[test]
fn auth_failure_maps_to_credentials_guidance() {
    let err = map_upstream_status(401, r#"{"detail": "Unauthorized"}"#);
    assert_eq!(err.code, "AUTH_FAILED");
    assert!(err.message.contains("API key"));
    assert!(!err.retryable);
}

#[test]
fn bad_input_passes_the_server_message_through() {
    let err = map_upstream_status(
        400,
        r#"{"detail": "Technical process description is too long. Please limit to 4000 characters."}"#,
    );
    assert_eq!(err.code, "BAD_INPUT");
    assert_eq!(
        err.message,
        "Technical process description is too long. Please limit to 4000 characters."
    );
}

#[test]
fn upstream_timeout_and_busy_have_distinct_codes() {
    let timeout = map_upstream_status(504, "");
    assert_eq!(timeout.code, "UPSTREAM_TIMEOUT");
    assert!(timeout.retryable);

    let busy = map_upstream_status(503, r#"{"detail": "Service temporarily unavailable."}"#);
    assert_eq!(busy.code, "UPSTREAM_BUSY");
    assert!(busy.message.contains("temporarily busy"));
    assert!(busy.message.contains("retry"));
    assert!(busy.retryable);
}

#[test]
fn server_errors_are_distinguished_by_message_content() {
    let config = map_upstream_status(
        500,
        r#"{"detail": "API configuration error: Missing required API keys or model name"}"#,
    );
    assert_eq!(config.code, "SERVER_CONFIG");

    let rate = map_upstream_status(500, r#"{"error": {"message": "Rate limit exceeded"}}"#);
    assert_eq!(rate.code, "RATE_LIMITED");
    assert!(rate.retryable);

    let generic = map_upstream_status(500, r#"{"detail": "An unexpected error occurred"}"#);
    assert_eq!(generic.code, "SERVER_ERROR");
    assert_eq!(generic.message, "An unexpected error occurred");
}

#[test]
fn unmapped_statuses_fall_back_to_the_server_message() {
    let limited = map_upstream_status(
        429,
        r#"{"detail": "Please wait a minute before uploading another file."}"#,
    );
    assert_eq!(limited.code, "UPSTREAM_UNKNOWN");
    assert_eq!(
        limited.message,
        "Please wait a minute before uploading another file."
    );
    assert_eq!(limited.details.as_deref(), Some("status=429"));

    let silent = map_upstream_status(418, "");
    assert_eq!(silent.code, "UPSTREAM_UNKNOWN");
    assert!(silent.message.contains("connection"));
}

#[test]
fn challenge_pages_are_reported_as_restricted_access() {
    let page = "<html>Attention Required! | Cloudflare ... Ray ID: abc</html>";
    let err = map_upstream_status(403, page);
    assert_eq!(err.code, "UPSTREAM_RESTRICTED");
    assert!(err.retryable);

    // A real 503 without challenge markers keeps the busy mapping.
    let busy = map_upstream_status(503, "");
    assert_eq!(busy.code, "UPSTREAM_BUSY");
}

#[test]
fn non_json_bodies_are_used_verbatim() {
    let err = map_upstream_status(400, "plain text refusal");
    assert_eq!(err.code, "BAD_INPUT");
    assert_eq!(err.message, "plain text refusal");
}
