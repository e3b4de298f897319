use super::DreamAnalysis;
use crate::error::Result;
use crate::text::Language;

/// Produces a [`DreamAnalysis`] for a dream narrative.
///
/// Implemented by the HTTP agents; the application layer only sees this seam.
#[async_trait::async_trait]
pub trait DreamAnalyzer: Send + Sync {
    /// Analyzes `content`, answering in `language`.
    async fn analyze(&self, content: &str, language: Language) -> Result<DreamAnalysis>;
}
