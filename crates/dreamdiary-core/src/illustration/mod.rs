//! Dream illustration seams.
//!
//! Image generation and image storage are both external concerns; the core
//! only defines what the application layer needs from them.

use crate::error::Result;
use std::path::PathBuf;

/// Raw image produced by a generator, together with the prompt that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub prompt: String,
}

/// Turns dream text into an illustration.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image for `text`, which may already carry the dream
    /// title and tags (see [`crate::text::enrich_dream_text`]).
    async fn generate(&self, text: &str) -> Result<GeneratedImage>;
}

/// Persists generated images.
#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores `bytes` and returns the path of the written file.
    async fn store(&self, bytes: &[u8]) -> Result<PathBuf>;

    /// Removes a previously stored image. Missing files are ignored.
    async fn remove(&self, path: &str) -> Result<()>;
}
