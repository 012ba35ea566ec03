/// Completion client — the single point of entry for all Groq API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion endpoint
/// directly. All provider interactions MUST go through this module.
///
/// Model: llama-3.3-70b-versatile (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::ChatMessage;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;
const TIMEOUT_SECS: u64 = 30;
/// Upstream error bodies are excerpted to this many characters before being
/// surfaced to the caller.
const ERROR_EXCERPT_CHARS: usize = 200;
/// Only the most recent entries of the caller-supplied history are forwarded.
const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("upstream request timed out")]
    Timeout,

    #[error("completion response contained no choices")]
    EmptyChoices,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Http(err)
        }
    }
}

/// OpenAI-compatible chat-completion request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// The single completion client shared by all handlers.
/// Wraps the Groq chat-completion endpoint; credentials are supplied per call.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
}

impl LlmClient {
    pub fn new() -> Self {
        Self::with_api_url(GROQ_API_URL)
    }

    /// Points the client at an alternate endpoint. Used by tests.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_url: api_url.into(),
        }
    }

    /// Sends one chat-completion request and returns the first choice's text
    /// unmodified. Exactly one attempt per call: failures are reported to the
    /// caller, never retried.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        message: &str,
        api_key: &str,
    ) -> Result<String, LlmError> {
        let request_body = CompletionRequest {
            model: MODEL,
            messages: build_messages(system_prompt, history, message),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key.trim())
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                detail: excerpt(&body, ERROR_EXCERPT_CHARS),
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyChoices)?;

        debug!("completion call succeeded ({} chars)", content.len());
        Ok(content)
    }
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the provider message list: system prompt first, then the most
/// recent `HISTORY_WINDOW` history entries in chronological order, then the
/// new user message last.
fn build_messages<'a>(
    system_prompt: &'a str,
    history: &'a [ChatMessage],
    message: &'a str,
) -> Vec<WireMessage<'a>> {
    let mut messages = Vec::with_capacity(history.len().min(HISTORY_WINDOW) + 2);
    messages.push(WireMessage {
        role: "system",
        content: system_prompt,
    });

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for msg in &history[start..] {
        messages.push(WireMessage {
            role: &msg.role,
            content: &msg.content,
        });
    }

    messages.push(WireMessage {
        role: "user",
        content: message,
    });
    messages
}

/// Truncates an upstream error body to at most `max_chars` characters,
/// respecting char boundaries.
fn excerpt(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        body.chars().take(max_chars).collect()
    }
}
