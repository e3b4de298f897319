//! OllamaApiAgent - dream analysis through a local Ollama server.
//!
//! Configuration priority: `secret.json` > environment variables > defaults
//! (`http://localhost:11434`, model `llama3`).

use crate::error::{AgentError, map_http_error};
use async_trait::async_trait;
use dreamdiary_core::analysis::{DreamAnalysis, DreamAnalyzer, parse_analysis_response};
use dreamdiary_core::config::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, OllamaConfig};
use dreamdiary_core::text::{Language, analysis_prompt};
use dreamdiary_infrastructure::storage::SecretStorage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const GENERATE_PATH: &str = "/api/generate";
/// Low sampling temperature keeps the JSON shape stable.
const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.2;

/// Analysis agent backed by Ollama's `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaApiAgent {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaApiAgent {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Loads configuration from `secret.json`, then `OLLAMA_BASE_URL` /
    /// `OLLAMA_MODEL`, then the defaults. Never fails: Ollama needs no key.
    pub fn from_storage(storage: &SecretStorage) -> Self {
        let config = storage.load().ok().and_then(|secret| secret.ollama);
        Self::from_sources(config, |key| env::var(key).ok())
    }

    /// Resolves each setting from `config`, then `lookup`, then the default.
    pub fn from_sources(
        config: Option<OllamaConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let config = config.unwrap_or_default();
        let base_url = config
            .base_url
            .or_else(|| lookup("OLLAMA_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string());
        let model = config
            .model
            .or_else(|| lookup("OLLAMA_MODEL"))
            .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());
        Self::new(base_url, model)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    fn build_request(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }

    async fn send_request(&self, body: &GenerateRequest) -> Result<String, AgentError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::transport("Ollama", err))?;

        let status = response.status();
        tracing::info!("[OllamaApiAgent] HTTP status: {}", status);

        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Ollama error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|err| AgentError::transport("Ollama", err))?;
        tracing::debug!("[OllamaApiAgent] Raw response: {}", body_text);

        extract_response(&body_text)
    }
}

#[async_trait]
impl DreamAnalyzer for OllamaApiAgent {
    async fn analyze(
        &self,
        content: &str,
        language: Language,
    ) -> dreamdiary_core::Result<DreamAnalysis> {
        let prompt = analysis_prompt(language, content)?;
        tracing::info!(
            "[OllamaApiAgent] Sending analysis request (model: {}, language: {})",
            self.model,
            language
        );
        tracing::debug!("[OllamaApiAgent] Prompt: {}", prompt);

        let request = self.build_request(prompt);
        let raw = self.send_request(&request).await?;

        Ok(parse_analysis_response(&raw, language))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

fn extract_response(body: &str) -> Result<String, AgentError> {
    serde_json::from_str::<GenerateResponse>(body)
        .map(|parsed| parsed.response)
        .map_err(|err| AgentError::InvalidResponse(format!("Ollama envelope: {err}")))
}
