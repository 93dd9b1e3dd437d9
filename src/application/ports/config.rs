//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted settings file
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read stored settings. A missing file yields an all-`None` config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Overwrite stored settings, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write [`AppConfig::defaults`]. Fails with
    /// [`ConfigError::AlreadyExists`] if the file is already there.
    async fn init(&self) -> Result<(), ConfigError>;
}
