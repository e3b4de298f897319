//! Dream Journal
//!
//! CRUD over the stored dreams. Deleting a dream also removes its stored
//! illustration.

use anyhow::{Context, Result, bail};
use dreamdiary_core::DreamDiaryError;
use dreamdiary_core::dream::{Dream, DreamRepository};
use dreamdiary_core::illustration::ImageStore;
use std::sync::Arc;
use uuid::Uuid;

/// Use case for recording and browsing dreams.
pub struct DreamJournal {
    dreams: Arc<dyn DreamRepository>,
    images: Arc<dyn ImageStore>,
}

impl DreamJournal {
    pub fn new(dreams: Arc<dyn DreamRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { dreams, images }
    }

    /// Records a new dream. Title and content must not be blank.
    pub async fn add(&self, dream: Dream) -> Result<Dream> {
        if dream.title.trim().is_empty() || dream.content.trim().is_empty() {
            bail!("A dream needs both a title and content");
        }
        self.dreams
            .save(&dream)
            .await
            .with_context(|| format!("Failed to save dream {}", dream.id))?;
        tracing::info!("[DreamJournal] Added dream {}", dream.id);
        Ok(dream)
    }

    /// Inserts or replaces a dream.
    pub async fn update(&self, dream: &Dream) -> Result<()> {
        self.dreams
            .save(dream)
            .await
            .with_context(|| format!("Failed to update dream {}", dream.id))
    }

    /// Deletes a dream and its illustration. Unknown ids are a no-op.
    pub async fn delete(&self, id: &Uuid) -> Result<()> {
        let existing = self.dreams.find_by_id(id).await?;

        if let Some(path) = existing.as_ref().and_then(|d| d.generated_image_url.as_deref()) {
            if let Err(e) = self.images.remove(path).await {
                tracing::warn!("[DreamJournal] Failed to remove image {}: {}", path, e);
            }
        }

        self.dreams
            .delete(id)
            .await
            .with_context(|| format!("Failed to delete dream {}", id))?;
        tracing::info!("[DreamJournal] Deleted dream {}", id);
        Ok(())
    }

    /// All dreams, newest first.
    pub async fn list(&self) -> Result<Vec<Dream>> {
        let mut dreams = self.dreams.list_all().await.context("Failed to list dreams")?;
        dreams.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(dreams)
    }

    /// Fetches one dream; a missing id is a `NotFound` error.
    pub async fn get(&self, id: &Uuid) -> Result<Dream> {
        self.dreams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DreamDiaryError::not_found("Dream", id.to_string()).into())
    }
}
