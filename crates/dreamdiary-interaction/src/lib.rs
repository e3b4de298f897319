//! HTTP agents for dream analysis and illustration.
//!
//! - [`OllamaApiAgent`]: analysis through a local Ollama server
//! - [`HuggingFaceImageAgent`]: Stable Diffusion via Hugging Face inference
//! - [`OpenAIImageAgent`]: DALL·E via the OpenAI Images API
//!
//! Each request is a single awaited call with no retry.

pub mod error;
pub mod huggingface_image_agent;
pub mod ollama_api_agent;
pub mod openai_image_agent;

pub use error::AgentError;
pub use huggingface_image_agent::HuggingFaceImageAgent;
pub use ollama_api_agent::OllamaApiAgent;
pub use openai_image_agent::OpenAIImageAgent;

use dreamdiary_core::illustration::ImageGenerator;
use dreamdiary_infrastructure::storage::SecretStorage;
use std::sync::Arc;

/// Which image service to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageProvider {
    #[default]
    OpenAI,
    HuggingFace,
}

/// Builds the image agent for `provider` from `secrets`, falling back to
/// environment variables.
pub fn image_generator(
    provider: ImageProvider,
    secrets: &SecretStorage,
) -> Result<Arc<dyn ImageGenerator>, AgentError> {
    let generator: Arc<dyn ImageGenerator> = match provider {
        ImageProvider::OpenAI => Arc::new(OpenAIImageAgent::try_from_storage(secrets)?),
        ImageProvider::HuggingFace => Arc::new(HuggingFaceImageAgent::try_from_storage(secrets)?),
    };
    tracing::info!("[image_generator] Using {:?}", provider);
    Ok(generator)
}
