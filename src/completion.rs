//! Client for the provider's OpenAI-compatible chat-completions API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

// Fixed sampling configuration. Every call is a stateless single-turn
// request; no conversation history is forwarded.
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 256;
/// A sequence that never occurs in practice, so generation is not cut short.
const STOP_SEQUENCE: &str = "NONE";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stop: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Errors from one completion round trip
#[derive(Debug, Clone)]
pub enum CompletionError {
    /// Transport-level failure (connect, timeout, TLS)
    Request(String),
    /// Non-success HTTP status from the provider (auth, quota, bad model)
    Status { status: u16, body: String },
    /// A 2xx response that carried no usable completion text
    Malformed(String),
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::Request(msg) => write!(f, "completion request failed: {msg}"),
            CompletionError::Status { status, body } => {
                write!(f, "provider returned status {status}: {body}")
            }
            CompletionError::Malformed(msg) => write!(f, "malformed provider response: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Request(err.to_string())
    }
}

/// Wraps the single "submit prompt, get completion text" call.
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Sends one single-turn user prompt and returns the generated text.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stop: STOP_SEQUENCE,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending completion request");

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::Malformed(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Malformed("response carried no choices".to_owned()))
    }
}
