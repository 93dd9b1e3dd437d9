//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::sermon::{Audience, SermonStructure};

/// Default chat-completion endpoint
pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub structure: Option<String>,
    pub audience: Option<String>,
    pub history: Option<bool>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Keys accepted by `config get/set`, in listing order
    pub const KEYS: &'static [&'static str] = &[
        "api_key",
        "api_url",
        "model",
        "structure",
        "audience",
        "history",
        "clipboard",
    ];

    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            api_url: Some(DEFAULT_API_URL.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            structure: Some(SermonStructure::default().to_string()),
            audience: Some(Audience::default().to_string()),
            history: Some(true),
            clipboard: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            api_url: other.api_url.or(self.api_url),
            model: other.model.or(self.model),
            structure: other.structure.or(self.structure),
            audience: other.audience.or(self.audience),
            history: other.history.or(self.history),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get the endpoint URL, or the public Mistral endpoint if not set
    pub fn api_url_or_default(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Get the model identifier, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get history setting, or true if not set
    pub fn history_or_default(&self) -> bool {
        self.history.unwrap_or(true)
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }

    /// Raw stored value of a key, if set
    pub fn value(&self, key: &str) -> Option<String> {
        match key {
            "api_key" => self.api_key.clone(),
            "api_url" => self.api_url.clone(),
            "model" => self.model.clone(),
            "structure" => self.structure.clone(),
            "audience" => self.audience.clone(),
            "history" => self.history.map(|b| b.to_string()),
            "clipboard" => self.clipboard.map(|b| b.to_string()),
            _ => None,
        }
    }

    /// Parse `value` for `key` and store it. Structure and audience tags are
    /// stored in canonical lowercase form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api_key" => self.api_key = Some(value.to_string()),
            "api_url" => self.api_url = Some(value.to_string()),
            "model" => self.model = Some(value.to_string()),
            "structure" => {
                let structure = value
                    .parse::<SermonStructure>()
                    .map_err(|e| invalid(key, e.to_string()))?;
                self.structure = Some(structure.to_string());
            }
            "audience" => {
                let audience = value
                    .parse::<Audience>()
                    .map_err(|e| invalid(key, e.to_string()))?;
                self.audience = Some(audience.to_string());
            }
            "history" => self.history = Some(parse_bool_for(key, value)?),
            "clipboard" => self.clipboard = Some(parse_bool_for(key, value)?),
            _ => return Err(unknown_key(key)),
        }
        self.check(key)
    }

    /// Check every set value. Unset keys always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::KEYS.iter().try_for_each(|key| self.check(key))
    }

    fn check(&self, key: &str) -> Result<(), ConfigError> {
        match key {
            "api_key" => non_empty(key, self.api_key.as_deref()),
            "model" => non_empty(key, self.model.as_deref()),
            "api_url" => match self.api_url.as_deref() {
                Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                    Err(invalid(
                        key,
                        format!("Invalid value '{}'. URL must start with http:// or https://", url),
                    ))
                }
                _ => Ok(()),
            },
            "structure" => match self.structure.as_deref() {
                Some(tag) => tag
                    .parse::<SermonStructure>()
                    .map(|_| ())
                    .map_err(|e| invalid(key, e.to_string())),
                None => Ok(()),
            },
            "audience" => match self.audience.as_deref() {
                Some(tag) => tag
                    .parse::<Audience>()
                    .map(|_| ())
                    .map_err(|e| invalid(key, e.to_string())),
                None => Ok(()),
            },
            "history" | "clipboard" => Ok(()),
            _ => Err(unknown_key(key)),
        }
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message,
    }
}

fn unknown_key(key: &str) -> ConfigError {
    invalid(
        key,
        format!("Unknown key. Valid keys: {}", AppConfig::KEYS.join(", ")),
    )
}

fn non_empty(key: &str, value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(invalid(key, "Value must not be empty".to_string())),
        _ => Ok(()),
    }
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).ok_or_else(|| invalid(key, "Value must be 'true' or 'false'".to_string()))
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
