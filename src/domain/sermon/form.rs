//! Inbound sermon form and its validation

use serde::{Deserialize, Serialize};

use super::audience::Audience;
use super::request::{GenerationRequest, PromptOptions, Topic};
use super::structure::SermonStructure;
use crate::domain::error::ValidationError;

/// Raw form submission as received from a caller.
/// Every field is optional so missing values surface as validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bible_verse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt_options: Option<PromptOptions>,
}

impl SermonForm {
    /// Parse a form from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Overlay `other` on top of `self`; only set fields override
    pub fn merge(self, other: Self) -> Self {
        let custom_prompt_options = match (self.custom_prompt_options, other.custom_prompt_options) {
            (None, None) => None,
            (Some(base), None) => Some(base),
            (None, Some(other)) => Some(other),
            (Some(base), Some(other)) => Some(base.merge(other)),
        };
        Self {
            topic: other.topic.or(self.topic),
            bible_verse: other.bible_verse.or(self.bible_verse),
            structure: other.structure.or(self.structure),
            audience: other.audience.or(self.audience),
            custom_prompt_options,
        }
    }

    /// Check required fields and bounds, producing a request the prompt
    /// builder can consume without further checks.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        let topic = Topic::parse(self.topic.clone().unwrap_or_default())?;

        let structure: SermonStructure = match self.structure.as_deref() {
            None | Some("") => return Err(ValidationError::MissingStructure),
            Some(s) => s.parse()?,
        };

        let audience: Audience = match self.audience.as_deref() {
            None | Some("") => return Err(ValidationError::MissingAudience),
            Some(s) => s.parse()?,
        };

        let mut request = GenerationRequest::new(topic, structure, audience);
        if let Some(verse) = &self.bible_verse {
            request = request.with_bible_verse(verse.clone());
        }
        if let Some(options) = &self.custom_prompt_options {
            request = request.with_options(options.clone());
        }
        Ok(request)
    }
}
