//! Domain error types

use thiserror::Error;

use super::sermon::{TOPIC_MAX_CHARS, TOPIC_MIN_CHARS};

/// Error when an unknown sermon structure tag is provided
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid sermon structure: \"{input}\". Valid structures are: topical, exegesis, textual, expository, narrative")]
pub struct InvalidStructureError {
    pub input: String,
}

/// Error when an unknown audience tag is provided
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid audience: \"{input}\". Valid audiences are: general, youth")]
pub struct InvalidAudienceError {
    pub input: String,
}

/// Rejections raised before a request ever reaches the prompt builder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Topic must be at least {min} characters (got {0})", min = TOPIC_MIN_CHARS)]
    TopicTooShort(usize),

    #[error("Topic must be at most {max} characters (got {0})", max = TOPIC_MAX_CHARS)]
    TopicTooLong(usize),

    #[error("Sermon structure is required")]
    MissingStructure,

    #[error(transparent)]
    InvalidStructure(#[from] InvalidStructureError),

    #[error("Target audience is required")]
    MissingAudience,

    #[error(transparent)]
    InvalidAudience(#[from] InvalidAudienceError),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
