//! Filesystem-backed implementations of the DreamDiary repositories.

pub mod image_store;
pub mod paths;
pub mod storage;
pub mod toml_dream_repository;
pub mod toml_settings_repository;

pub use crate::image_store::JpegImageStore;
pub use crate::paths::DreamDiaryPaths;
pub use crate::storage::SecretStorage;
pub use crate::toml_dream_repository::TomlDreamRepository;
pub use crate::toml_settings_repository::TomlSettingsRepository;
