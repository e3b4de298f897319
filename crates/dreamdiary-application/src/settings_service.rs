//! Settings Service

use anyhow::{Context, Result};
use dreamdiary_core::settings::{Settings, SettingsRepository};
use rand::Rng;
use std::sync::Arc;

pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> Result<Settings> {
        self.repository.load().await.context("Failed to load settings")
    }

    pub async fn save(&self, settings: &Settings) -> Result<()> {
        self.repository
            .save(settings)
            .await
            .context("Failed to save settings")?;
        tracing::info!("[SettingsService] Settings saved");
        Ok(())
    }

    /// Applies `edit` to the stored settings and saves the result.
    pub async fn update(&self, edit: impl FnOnce(&mut Settings)) -> Result<Settings> {
        let mut settings = self.load().await?;
        edit(&mut settings);
        self.save(&settings).await?;
        Ok(settings)
    }

    /// A random tip for the selected lucid dreaming technique, if tips are
    /// enabled.
    pub async fn lucid_tip<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<&'static str>> {
        Ok(self.load().await?.lucid_tip(rng))
    }
}
