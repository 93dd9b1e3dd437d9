//! Saved generation entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::sermon::{Audience, GenerationRequest, SermonStructure};

/// A successfully generated outline kept for later viewing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bible_verse: Option<String>,
    pub structure: SermonStructure,
    pub audience: Audience,
    pub content: String,
}

impl HistoryItem {
    /// Record generated content for a request, stamped with a fresh id and
    /// the current time. Returns `None` for empty content.
    pub fn record(request: &GenerationRequest, content: &str) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            topic: request.topic().to_string(),
            bible_verse: request.bible_verse().map(str::to_string),
            structure: request.structure(),
            audience: request.audience(),
            content: content.to_string(),
        })
    }

    /// First id characters, enough to pick an item from a listing
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
