//! TOML-based SettingsRepository implementation.

use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use dreamdiary_core::error::{DreamDiaryError, Result};
use dreamdiary_core::settings::{Settings, SettingsRepository};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

/// Stores the settings record in `settings.toml`.
pub struct TomlSettingsRepository {
    file: Arc<AtomicTomlFile<Settings>>,
}

impl TomlSettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }
}

#[async_trait]
impl SettingsRepository for TomlSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        let file = Arc::clone(&self.file);
        let loaded = task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| DreamDiaryError::io(format!("Failed to spawn blocking task: {}", e)))?;

        match loaded {
            Ok(Some(settings)) => Ok(settings),
            Ok(None) => Ok(Settings::default()),
            Err(e) => {
                tracing::warn!(
                    "[TomlSettingsRepository] Using defaults, could not read settings: {}",
                    e
                );
                Ok(Settings::default())
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let file = Arc::clone(&self.file);
        let settings = settings.clone();
        task::spawn_blocking(move || file.save(&settings).map_err(DreamDiaryError::from))
            .await
            .map_err(|e| DreamDiaryError::io(format!("Failed to spawn blocking task: {}", e)))?
    }
}
