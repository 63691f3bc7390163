use cr_core::error::AppError;
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::status;

mod multipart;

/// Backend verdict for one uploaded traffic capture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Clean,
    Malicious,
}

/// Verdict triple of the threat-classification backend, passed to the page
/// unchanged. `threat_type` is only set for malicious captures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    pub status: ScanStatus,
    #[serde(rename = "type")]
    pub threat_type: Option<String>,
    pub message: String,
}

/// Client for the sentinel traffic-scan backend.
///
/// The capture file (a JSON array of 10 traffic metrics) is uploaded
/// verbatim; no local interpretation of the values happens here. Size
/// limits, format checks and per-user rate limiting are all enforced
/// upstream and surface through the status taxonomy.
#[derive(Debug, Clone)]
pub struct SentinelClient {
    endpoint: Endpoint,
}

impl SentinelClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            endpoint: Endpoint::new(base_url)?,
        })
    }

    pub fn scan_capture(
        &self,
        file_name: &str,
        file_bytes: &[u8],
        username: Option<&str>,
    ) -> Result<ScanReport, AppError> {
        let boundary = multipart::pick_boundary(file_bytes);
        let body = multipart::encode_form(&boundary, file_name, file_bytes, username);

        let request = ureq::post(&self.endpoint.join("/api/sentinel/analyze")).set(
            "Content-Type",
            &format!("multipart/form-data; boundary={boundary}"),
        );

        let resp = status::dispatch("traffic analysis service", request.send_bytes(&body))?;
        resp.into_json().map_err(|e| {
            AppError::new("SCAN_FAILED", "Failed to decode traffic scan response")
                .with_details(e.to_string())
        })
    }
}
