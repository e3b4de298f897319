//! Dream domain module.
//!
//! - `model`: the journal entry (`Dream`) and its mood (`DreamMood`)
//! - `repository`: persistence trait for dream records

mod model;
mod repository;

pub use model::{Dream, DreamMood};
pub use repository::DreamRepository;
