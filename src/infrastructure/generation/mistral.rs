//! Mistral chat-completion generator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ports::{GenerationError, Generator};
use crate::domain::config::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::domain::sermon::AssembledPrompt;

/// Sampling temperature for every request
const TEMPERATURE: f64 = 0.7;

/// Upper bound on generated tokens
const MAX_TOKENS: u32 = 4000;

// Request types for the chat-completion API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// Response types for the chat-completion API

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Generator backed by a Mistral-compatible chat-completion endpoint
pub struct MistralGenerator {
    api_key: String,
    api_url: String,
    model: String,
    client: reqwest::Client,
}

impl MistralGenerator {
    /// Create a generator for the public endpoint and default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the generator at another completion endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Use a different model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body: one user turn carrying the whole prompt
    fn build_request(&self, prompt: &AssembledPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.content().to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Extract the first choice's message text
    fn extract_text(response: ChatCompletionResponse) -> Option<String> {
        response
            .choices?
            .into_iter()
            .next()?
            .message?
            .content
    }
}

#[async_trait]
impl Generator for MistralGenerator {
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, GenerationError> {
        let body = self.build_request(prompt);
        debug!(url = %self.api_url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        let text = Self::extract_text(response).ok_or(GenerationError::EmptyResponse)?;

        // whitespace-only counts as empty; anything else is passed through as sent
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}
