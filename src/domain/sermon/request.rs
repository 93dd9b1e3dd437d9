//! Generation request value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use super::audience::Audience;
use super::structure::SermonStructure;
use crate::domain::error::ValidationError;

/// Minimum topic length, in characters
pub const TOPIC_MIN_CHARS: usize = 3;

/// Maximum topic length, in characters
pub const TOPIC_MAX_CHARS: usize = 100;

/// Sermon topic whose length has been checked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Validate a topic, counting characters rather than bytes
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let len = input.chars().count();
        if len == 0 {
            return Err(ValidationError::MissingTopic);
        }
        if len < TOPIC_MIN_CHARS {
            return Err(ValidationError::TopicTooShort(len));
        }
        if len > TOPIC_MAX_CHARS {
            return Err(ValidationError::TopicTooLong(len));
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional prompt sections.
///
/// Every flag is tri-state: `None` and `Some(true)` both include the
/// section, only `Some(false)` drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_purpose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_bible_research: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_applications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_call_to_action: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

impl PromptOptions {
    pub fn include_purpose(&self) -> bool {
        self.include_purpose != Some(false)
    }

    pub fn include_bible_research(&self) -> bool {
        self.include_bible_research != Some(false)
    }

    pub fn include_applications(&self) -> bool {
        self.include_applications != Some(false)
    }

    pub fn include_call_to_action(&self) -> bool {
        self.include_call_to_action != Some(false)
    }

    /// Custom instructions, if any non-empty text was given
    pub fn custom_instructions(&self) -> Option<&str> {
        self.custom_instructions.as_deref().filter(|s| !s.is_empty())
    }

    /// Overlay `other` on top of `self`; only set values override
    pub fn merge(self, other: Self) -> Self {
        Self {
            include_purpose: other.include_purpose.or(self.include_purpose),
            include_bible_research: other.include_bible_research.or(self.include_bible_research),
            include_applications: other.include_applications.or(self.include_applications),
            include_call_to_action: other.include_call_to_action.or(self.include_call_to_action),
            custom_instructions: other.custom_instructions.or(self.custom_instructions),
        }
    }
}

/// One validated generation intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: Topic,
    bible_verse: Option<String>,
    structure: SermonStructure,
    audience: Audience,
    options: Option<PromptOptions>,
}

impl GenerationRequest {
    pub fn new(topic: Topic, structure: SermonStructure, audience: Audience) -> Self {
        Self {
            topic,
            bible_verse: None,
            structure,
            audience,
            options: None,
        }
    }

    /// Attach a verse reference; an empty string counts as no verse
    pub fn with_bible_verse(mut self, verse: impl Into<String>) -> Self {
        let verse = verse.into();
        self.bible_verse = if verse.is_empty() { None } else { Some(verse) };
        self
    }

    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn bible_verse(&self) -> Option<&str> {
        self.bible_verse.as_deref()
    }

    pub fn structure(&self) -> SermonStructure {
        self.structure
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Prompt options; an absent options object behaves as all defaults
    pub fn options(&self) -> PromptOptions {
        self.options.clone().unwrap_or_default()
    }
}
