//! Errors raised while talking to the analysis and image services.

use dreamdiary_core::DreamDiaryError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a single outbound service call.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response envelope did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service returned bytes that are not an image
    #[error("Image could not be decoded: {0}")]
    ImageDecode(String),

    /// Missing API key or unusable endpoint
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AgentError {
    pub fn transport(service: &str, err: reqwest::Error) -> Self {
        Self::Transport(format!("{service} request failed: {err}"))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<AgentError> for DreamDiaryError {
    fn from(err: AgentError) -> Self {
        DreamDiaryError::agent(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Message(String),
    Detailed { message: String },
}

/// Builds an [`AgentError::HttpStatus`], preferring the service's own error
/// message when the body is a JSON error envelope.
///
/// Understands `{"error": "..."}` (Ollama, Hugging Face) and
/// `{"error": {"message": "..."}}` (OpenAI).
pub(crate) fn map_http_error(status: StatusCode, body: String) -> AgentError {
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| match envelope.error {
            ErrorField::Message(message) => message,
            ErrorField::Detailed { message } => message,
        })
        .unwrap_or(body);

    AgentError::HttpStatus {
        status: status.as_u16(),
        body: message,
    }
}
