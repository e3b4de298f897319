//! Crate-wide error type shared by every DreamDiary layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every fallible core operation returns this. It is `Clone` and
/// serializable so it can cross task and process boundaries.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum DreamDiaryError {
    /// Lookup by id missed.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("IO error: {message}")]
    Io { message: String },

    /// Storage-level failure other than plain I/O, e.g. file locking.
    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis or image service failed.
    #[error("Service error: {0}")]
    Agent(String),

    /// Broken invariant, e.g. an encoder rejecting a decoded image.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DreamDiaryError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent(_))
    }
}

impl From<std::io::Error> for DreamDiaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DreamDiaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DreamDiaryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DreamDiaryError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for DreamDiaryError {
    fn from(err: minijinja::Error) -> Self {
        Self::Internal(format!("Template rendering failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DreamDiaryError>;
