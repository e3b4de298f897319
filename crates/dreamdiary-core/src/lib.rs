//! Domain layer of DreamDiary: models, repository traits, the heuristic text
//! pipeline and LLM response repair.

pub mod analysis;
pub mod config;
pub mod dream;
pub mod error;
pub mod illustration;
pub mod search;
pub mod secret;
pub mod settings;
pub mod statistics;
pub mod text;

pub use error::{DreamDiaryError, Result};
