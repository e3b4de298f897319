//! Dream analysis results and the repair of malformed LLM responses.

mod analyzer;
mod model;
pub mod repair;

pub use analyzer::DreamAnalyzer;
pub use model::DreamAnalysis;
pub use repair::{contains_english, contains_turkish, parse_analysis_response, translate_analysis};
