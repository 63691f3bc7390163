use std::time::Duration;

use cr_core::error::AppError;
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::status;

const TEMPERATURE: f32 = 0.3;
const MAX_COMPLETION_TOKENS: u32 = 800;

/// Seam over the summarization provider.
pub trait Summarizer {
    /// Run one completion: a system instruction plus a user prompt, returning
    /// the model's free-text reply.
    fn complete(
        &self,
        system: &str,
        user: &str,
        timeout: Option<Duration>,
    ) -> Result<String, AppError>;
}

/// HTTP client for an OpenAI-compatible chat-completions provider.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    endpoint: Endpoint,
    api_key: String,
    model: String,
}

impl HttpSummarizer {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            endpoint: Endpoint::new(base_url)?,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl Summarizer for HttpSummarizer {
    fn complete(
        &self,
        system: &str,
        user: &str,
        timeout: Option<Duration>,
    ) -> Result<String, AppError> {
        let req = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let mut request = ureq::post(&self.endpoint.join("/chat/completions"))
            .set("Authorization", &format!("Bearer {}", self.api_key));
        if let Some(t) = timeout {
            request = request.timeout(t);
        }

        let payload = serde_json::to_value(req).map_err(|e| {
            AppError::new("SUMMARY_FAILED", "Failed to encode summarization request")
                .with_details(e.to_string())
        })?;
        let resp = status::dispatch("summarization provider", request.send_json(payload))?;
        let parsed: ChatResponse = resp.into_json().map_err(|e| {
            AppError::new("SUMMARY_FAILED", "Failed to decode summarization response")
                .with_details(e.to_string())
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(AppError::new(
                "SUMMARY_EMPTY",
                "The summarizer returned an empty analysis",
            ));
        }
        Ok(content)
    }
}
