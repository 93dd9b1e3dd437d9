//! History repository port interface

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::history::HistoryItem;

/// History storage errors
#[derive(Debug, Clone, Error)]
pub enum HistoryError {
    #[error("Failed to read history: {0}")]
    Read(String),

    #[error("Failed to parse history file: {0}")]
    Parse(String),

    #[error("Failed to write history: {0}")]
    Write(String),
}

/// Port for storing generated outlines
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Store an item ahead of all existing ones.
    async fn save(&self, item: HistoryItem) -> Result<(), HistoryError>;

    /// All items, newest first.
    async fn list(&self) -> Result<Vec<HistoryItem>, HistoryError>;

    /// Find an item by its full id.
    async fn get(&self, id: Uuid) -> Result<Option<HistoryItem>, HistoryError>;

    /// Delete an item. Returns whether anything was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, HistoryError>;

    /// Delete every item.
    async fn clear(&self) -> Result<(), HistoryError>;
}
