//! TOML-based DreamRepository implementation.
//!
//! Each dream lives in its own `dreams/<id>.toml` file.

use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use dreamdiary_core::dream::{Dream, DreamRepository};
use dreamdiary_core::error::{DreamDiaryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use uuid::Uuid;

/// Stores dreams as individual TOML files.
///
/// All file access runs on the blocking pool.
pub struct TomlDreamRepository {
    dreams_dir: PathBuf,
}

impl TomlDreamRepository {
    /// Creates the repository, creating `dreams_dir` when missing.
    pub fn new(dreams_dir: impl AsRef<Path>) -> Result<Self> {
        let dreams_dir = dreams_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dreams_dir)?;
        Ok(Self { dreams_dir })
    }

    fn file(&self, id: &Uuid) -> AtomicTomlFile<Dream> {
        AtomicTomlFile::new(self.dreams_dir.join(format!("{}.toml", id)))
    }

    fn list_sync(dir: &Path) -> Result<Vec<Dream>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut dreams = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            match AtomicTomlFile::<Dream>::new(path.clone()).load() {
                Ok(Some(dream)) => dreams.push(dream),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        "[TomlDreamRepository] Skipping unreadable {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }
        Ok(dreams)
    }
}

fn join_error(e: task::JoinError) -> DreamDiaryError {
    DreamDiaryError::io(format!("Failed to spawn blocking task: {}", e))
}

#[async_trait]
impl DreamRepository for TomlDreamRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dream>> {
        let file = self.file(id);
        task::spawn_blocking(move || file.load().map_err(DreamDiaryError::from))
            .await
            .map_err(join_error)?
    }

    async fn save(&self, dream: &Dream) -> Result<()> {
        let file = self.file(&dream.id);
        let dream = dream.clone();
        tracing::debug!("[TomlDreamRepository] Saving dream {}", dream.id);
        task::spawn_blocking(move || file.save(&dream).map_err(DreamDiaryError::from))
            .await
            .map_err(join_error)?
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let file = self.file(id);
        task::spawn_blocking(move || file.remove().map_err(DreamDiaryError::from))
            .await
            .map_err(join_error)?
    }

    async fn list_all(&self) -> Result<Vec<Dream>> {
        let dir = self.dreams_dir.clone();
        task::spawn_blocking(move || Self::list_sync(&dir))
            .await
            .map_err(join_error)?
    }
}
