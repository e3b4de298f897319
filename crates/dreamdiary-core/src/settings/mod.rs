//! User preferences and lucid dreaming techniques.

mod lucid;
mod model;
mod repository;

pub use lucid::LucidDreamingTechnique;
pub use model::Settings;
pub use repository::SettingsRepository;
