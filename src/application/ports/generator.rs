//! Text generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::sermon::AssembledPrompt;

/// Generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty completion response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the external text generation service
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send the prompt as a single user turn and return the generated text.
    ///
    /// Makes exactly one outbound call; no retries.
    async fn generate(&self, prompt: &AssembledPrompt) -> Result<String, GenerationError>;
}
