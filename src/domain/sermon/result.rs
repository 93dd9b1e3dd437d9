//! Generation result value object

use serde::{Deserialize, Serialize};

/// Message shown to the user for any generation failure.
/// The technical cause only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate sermon. Please try again later.";

/// Outcome of one generation call, as handed back to the caller.
///
/// On the wire this is `{"content": "..."}` for a success and
/// `{"content": "", "error": "..."}` for a failure. A response with neither
/// an error nor any text reads back as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GenerationResponse", from = "GenerationResponse")]
pub enum GenerationResult {
    Success { content: String },
    Failure { error: String },
}

impl GenerationResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self::Success {
            content: content.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Generated text; empty for a failure
    pub fn content(&self) -> &str {
        match self {
            Self::Success { content } => content,
            Self::Failure { .. } => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// Flat wire shape of [`GenerationResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        match result {
            GenerationResult::Success { content } => Self {
                content,
                error: None,
            },
            GenerationResult::Failure { error } => Self {
                content: String::new(),
                error: Some(error),
            },
        }
    }
}

impl From<GenerationResponse> for GenerationResult {
    fn from(response: GenerationResponse) -> Self {
        match response.error {
            Some(error) => Self::Failure { error },
            None if response.content.trim().is_empty() => Self::Failure {
                error: GENERIC_FAILURE_MESSAGE.to_string(),
            },
            None => Self::Success {
                content: response.content,
            },
        }
    }
}
