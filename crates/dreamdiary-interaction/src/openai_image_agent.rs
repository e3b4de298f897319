//! OpenAIImageAgent - dream illustrations from the OpenAI Images API.
//!
//! The generation call returns a URL; a second GET downloads the bytes.
//! Configuration priority: `secret.json` > `OPENAI_API_KEY`.

use crate::error::{AgentError, map_http_error};
use async_trait::async_trait;
use dreamdiary_core::config::{DEFAULT_OPENAI_IMAGE_MODEL, OpenAIConfig};
use dreamdiary_core::illustration::{GeneratedImage, ImageGenerator};
use dreamdiary_core::text::build_image_prompt;
use dreamdiary_infrastructure::storage::SecretStorage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const BASE_URL: &str = "https://api.openai.com/v1/images/generations";
const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "hd";
const IMAGE_STYLE: &str = "vivid";

/// Image agent for DALL·E style models.
#[derive(Clone)]
pub struct OpenAIImageAgent {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAIImageAgent {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: BASE_URL.to_string(),
        }
    }

    /// Loads configuration from `secret.json` or `OPENAI_API_KEY`.
    ///
    /// Model name defaults to `dall-e-3` if not specified.
    pub fn try_from_storage(storage: &SecretStorage) -> Result<Self, AgentError> {
        let config = storage.load().ok().and_then(|secret| secret.openai);
        Self::from_sources(config, |key| env::var(key).ok())
    }

    pub fn from_sources(
        config: Option<OpenAIConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AgentError> {
        let config = config.filter(|c| !c.api_key.trim().is_empty());
        let (api_key, model) = match config {
            Some(config) => (Some(config.api_key), config.model),
            None => (lookup("OPENAI_API_KEY"), None),
        };

        api_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                Self::new(
                    key,
                    model.unwrap_or_else(|| DEFAULT_OPENAI_IMAGE_MODEL.to_string()),
                )
            })
            .ok_or_else(|| {
                AgentError::Configuration(
                    "OPENAI_API_KEY not found in secret.json or environment variables".into(),
                )
            })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, prompt: String) -> ImageGenerationRequest {
        ImageGenerationRequest {
            model: self.model.clone(),
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            quality: IMAGE_QUALITY,
            style: IMAGE_STYLE,
        }
    }

    async fn send_request(&self, body: &ImageGenerationRequest) -> Result<String, AgentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::transport("OpenAI", err))?;

        let status = response.status();
        tracing::info!("[OpenAIImageAgent] HTTP status: {}", status);

        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|err| AgentError::transport("OpenAI", err))?;

        extract_image_url(&body_text)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, AgentError> {
        tracing::info!("[OpenAIImageAgent] Downloading generated image");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| AgentError::transport("Image download", err))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| AgentError::transport("Image download", err))?;
        if bytes.is_empty() {
            return Err(AgentError::ImageDecode("empty download".into()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for OpenAIImageAgent {
    async fn generate(&self, text: &str) -> dreamdiary_core::Result<GeneratedImage> {
        let prompt = build_image_prompt(text)?;
        tracing::info!("[OpenAIImageAgent] Requesting image (model: {})", self.model);
        tracing::debug!("[OpenAIImageAgent] Prompt: {}", prompt);

        let request = self.build_request(prompt.clone());
        let url = self.send_request(&request).await?;
        let bytes = self.download(&url).await?;

        Ok(GeneratedImage { bytes, prompt })
    }
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    model: String,
    prompt: String,
    n: u8,
    size: &'static str,
    quality: &'static str,
    style: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

fn extract_image_url(body: &str) -> Result<String, AgentError> {
    let parsed: ImageGenerationResponse = serde_json::from_str(body)
        .map_err(|err| AgentError::InvalidResponse(format!("OpenAI envelope: {err}")))?;

    parsed
        .data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .ok_or_else(|| AgentError::InvalidResponse("OpenAI returned no image URL".into()))
}
