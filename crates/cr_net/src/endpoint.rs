use cr_core::error::AppError;

/// Normalized provider base URL shared by every client in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Accepts `http`/`https` URLs only and trims any trailing slash so that
    /// path joining stays predictable.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        let valid = matches!(rest, Some(host) if !host.is_empty());
        if !valid {
            return Err(AppError::new(
                "ENDPOINT_INVALID",
                "Provider base URL must be an http(s) URL",
            )
            .with_details(format!("base_url={base_url}")));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute path (leading `/`) onto the base URL.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
