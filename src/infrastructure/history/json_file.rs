//! JSON file history store adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{HistoryError, HistoryRepository};
use crate::domain::history::HistoryItem;

/// Directory name under the XDG data home
const APP_DIR: &str = "sermon-gen";

/// History kept as a JSON array in a single file, newest item first
pub struct JsonHistoryStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonHistoryStore {
    /// Create a store at `$XDG_DATA_HOME/sermon-gen/history.json`
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join(APP_DIR);

        Self::with_path(data_dir.join("history.json"))
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HistoryError::Read(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| HistoryError::Parse(e.to_string()))
    }

    async fn write_items(&self, items: &[HistoryItem]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryError::Write(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| HistoryError::Write(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| HistoryError::Write(e.to_string()))
    }
}

impl Default for JsonHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryStore {
    async fn save(&self, item: HistoryItem) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items().await?;
        items.insert(0, item);
        self.write_items(&items).await
    }

    async fn list(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        let _guard = self.lock.lock().await;
        self.read_items().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryItem>, HistoryError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_items().await?.into_iter().find(|i| i.id == id))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, HistoryError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items().await?;
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_items(&items).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;
        self.write_items(&[]).await
    }
}
