//! Application layer for DreamDiary.
//!
//! Use cases coordinating the core domain, the on-disk repositories and the
//! HTTP agents. Every service takes its collaborators as trait objects so the
//! CLI can wire real implementations and tests can wire fakes.

pub mod dream_detail_service;
pub mod dream_journal;
pub mod search_service;
pub mod settings_service;
pub mod statistics_service;

pub use dream_detail_service::DreamDetailService;
pub use dream_journal::DreamJournal;
pub use search_service::SearchService;
pub use settings_service::SettingsService;
pub use statistics_service::StatisticsService;

#[cfg(test)]
pub(crate) mod test_support;
