//! Minimal `multipart/form-data` encoder for the sentinel upload.
//!
//! `ureq` ships no multipart support; the backend's form contract is small
//! enough (one file part, one optional text field) that the body is
//! assembled by hand.

/// Pick a boundary that does not occur anywhere in the payload.
pub(crate) fn pick_boundary(payload: &[u8]) -> String {
    let mut counter: u64 = 0;
    loop {
        let candidate = format!("----complyradar-{:08}-{counter:04}", std::process::id());
        if !payload
            .windows(candidate.len())
            .any(|w| w == candidate.as_bytes())
        {
            return candidate;
        }
        counter += 1;
    }
}

/// Assemble the form body: a `file` part carrying the capture bytes verbatim
/// plus an optional `username` field for upstream rate limiting.
pub(crate) fn encode_form(
    boundary: &str,
    file_name: &str,
    file_bytes: &[u8],
    username: Option<&str>,
) -> Vec<u8> {
    let mut body: Vec<u8> = Vec::with_capacity(file_bytes.len() + 512);

    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/json\r\n\r\n");
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(b"\r\n");

    if let Some(username) = username {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"username\"\r\n\r\n");
        body.extend_from_slice(username.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
