//! HuggingFaceImageAgent - dream illustrations from the Hugging Face
//! inference API (Stable Diffusion 3.5 Large).
//!
//! Configuration priority: `secret.json` > `HUGGINGFACE_API_TOKEN`.

use crate::error::{AgentError, map_http_error};
use async_trait::async_trait;
use dreamdiary_core::config::HuggingFaceConfig;
use dreamdiary_core::illustration::{GeneratedImage, ImageGenerator};
use dreamdiary_core::text::{KeywordOptions, extract_keywords, simple_image_prompt};
use dreamdiary_infrastructure::storage::SecretStorage;
use rand::Rng;
use reqwest::Client;
use serde::Serialize;
use std::env;

const ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-3.5-large";

const NEGATIVE_PROMPT: &str = "blurry, bad quality, distorted, ugly, unrealistic proportions, bad anatomy, low resolution, text, watermark, cartoon style, anime style";
const GUIDANCE_SCALE: f32 = 9.0;
const INFERENCE_STEPS: u32 = 50;
const MAX_SEED: u32 = 9_999_999;

/// Image agent that posts a prompt and receives raw image bytes.
#[derive(Clone)]
pub struct HuggingFaceImageAgent {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl HuggingFaceImageAgent {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: ENDPOINT.to_string(),
        }
    }

    /// Loads the token from `secret.json` or `HUGGINGFACE_API_TOKEN`.
    pub fn try_from_storage(storage: &SecretStorage) -> Result<Self, AgentError> {
        let config = storage.load().ok().and_then(|secret| secret.huggingface);
        Self::from_sources(config, |key| env::var(key).ok())
    }

    pub fn from_sources(
        config: Option<HuggingFaceConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AgentError> {
        let present = |key: &String| !key.trim().is_empty();
        config
            .map(|c| c.api_key)
            .filter(present)
            .or_else(|| lookup("HUGGINGFACE_API_TOKEN"))
            .filter(present)
            .map(Self::new)
            .ok_or_else(|| {
                AgentError::Configuration(
                    "HUGGINGFACE_API_TOKEN not found in secret.json or environment variables"
                        .into(),
                )
            })
    }

    /// Overrides the model endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, prompt: String, seed: u32) -> InferenceRequest {
        InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                negative_prompt: NEGATIVE_PROMPT,
                guidance_scale: GUIDANCE_SCALE,
                num_inference_steps: INFERENCE_STEPS,
                seed,
            },
        }
    }

    async fn send_request(&self, body: &InferenceRequest) -> Result<Vec<u8>, AgentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::transport("Hugging Face", err))?;

        let status = response.status();
        tracing::info!("[HuggingFaceImageAgent] HTTP status: {}", status);

        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Hugging Face error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| AgentError::transport("Hugging Face", err))?;

        if bytes.is_empty() {
            return Err(AgentError::ImageDecode("empty response body".into()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageAgent {
    async fn generate(&self, text: &str) -> dreamdiary_core::Result<GeneratedImage> {
        let keywords = extract_keywords(text, KeywordOptions::compact());
        let prompt = simple_image_prompt(text, &keywords)?;
        let seed = rand::thread_rng().gen_range(1..=MAX_SEED);

        tracing::info!("[HuggingFaceImageAgent] Requesting image (seed: {})", seed);
        tracing::debug!("[HuggingFaceImageAgent] Prompt: {}", prompt);

        let request = self.build_request(prompt.clone(), seed);
        let bytes = self.send_request(&request).await?;

        Ok(GeneratedImage { bytes, prompt })
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    negative_prompt: &'static str,
    guidance_scale: f32,
    num_inference_steps: u32,
    seed: u32,
}
