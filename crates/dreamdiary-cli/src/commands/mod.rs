//! Subcommand implementations and the wiring they share.

pub mod ai;
pub mod dreams;
pub mod settings;
pub mod stats;

use anyhow::Result;
use dreamdiary_application::{DreamJournal, SearchService, SettingsService, StatisticsService};
use dreamdiary_core::dream::DreamRepository;
use dreamdiary_core::illustration::ImageStore;
use dreamdiary_infrastructure::{
    DreamDiaryPaths, JpegImageStore, SecretStorage, TomlDreamRepository, TomlSettingsRepository,
};
use std::sync::Arc;

/// Repositories and services built from the resolved paths.
pub struct AppContext {
    pub secrets: SecretStorage,
    pub dreams: Arc<dyn DreamRepository>,
    pub images: Arc<dyn ImageStore>,
    pub journal: DreamJournal,
    pub search: SearchService,
    pub statistics: StatisticsService,
    pub settings: SettingsService,
}

impl AppContext {
    pub fn new(paths: DreamDiaryPaths) -> Result<Self> {
        let dreams: Arc<dyn DreamRepository> =
            Arc::new(TomlDreamRepository::new(paths.dreams_dir())?);
        let images: Arc<dyn ImageStore> = Arc::new(JpegImageStore::new(paths.images_dir()));
        let settings = Arc::new(TomlSettingsRepository::new(paths.settings_file()));

        tracing::debug!("[AppContext] Data directory: {}", paths.data_dir().display());

        Ok(Self {
            secrets: SecretStorage::from_paths(&paths),
            journal: DreamJournal::new(dreams.clone(), images.clone()),
            search: SearchService::new(dreams.clone()),
            statistics: StatisticsService::new(dreams.clone()),
            settings: SettingsService::new(settings),
            dreams,
            images,
        })
    }
}
