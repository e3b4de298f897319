//! Settings repository trait.

use super::model::Settings;
use crate::error::Result;

/// Persistence for the single settings record.
#[async_trait::async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads settings; a missing or unreadable record yields defaults.
    async fn load(&self) -> Result<Settings>;

    /// Replaces the stored settings.
    async fn save(&self, settings: &Settings) -> Result<()>;
}
