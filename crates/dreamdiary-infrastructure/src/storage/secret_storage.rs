//! Read-only access to `secret.json`.
//!
//! Loads `secret.json` (API keys and service endpoints) from the config
//! directory. The file is read-only from the application's point of view.

use crate::paths::DreamDiaryPaths;
use dreamdiary_core::config::SecretConfig;
use dreamdiary_core::secret::SecretService;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretStorageError {
    #[error("Secret file not found at: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid secret.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage for `secret.json`.
///
/// Does not validate keys and never writes the file.
#[derive(Debug, Clone)]
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// `secret.json` in the config directory of `paths`.
    pub fn from_paths(paths: &DreamDiaryPaths) -> Self {
        Self {
            path: paths.secret_file(),
        }
    }

    /// Uses a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads and parses the secret file.
    ///
    /// A missing file is [`SecretStorageError::NotFound`].
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SecretStorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like [`load`](Self::load) but treats a missing file as an empty config.
    pub fn load_or_default(&self) -> Result<SecretConfig, SecretStorageError> {
        match self.load() {
            Err(SecretStorageError::NotFound(_)) => Ok(SecretConfig::default()),
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SecretService for SecretStorage {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_or_default().map_err(|e| e.to_string())
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        let storage = SecretStorage::with_path(file_path.clone());

        match storage.load() {
            Err(SecretStorageError::NotFound(path)) => assert_eq!(path, file_path),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
        assert_eq!(storage.load_or_default().unwrap(), SecretConfig::default());
    }

    #[test]
    fn test_load_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{
            "ollama": { "base_url": "http://gpu-box:11434" },
            "huggingface": { "api_key": "hf_test" }
        }"#;
        fs::write(&file_path, json_content).unwrap();

        let config = SecretStorage::with_path(file_path).load().unwrap();

        let ollama = config.ollama.unwrap();
        assert_eq!(ollama.base_url.as_deref(), Some("http://gpu-box:11434"));
        assert!(ollama.model.is_none());
        assert_eq!(config.huggingface.unwrap().api_key, "hf_test");
        assert!(config.openai.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        fs::write(&file_path, r#"{ invalid json"#).unwrap();

        let result = SecretStorage::with_path(file_path).load();
        assert!(matches!(result, Err(SecretStorageError::Parse(_))));
    }

    #[tokio::test]
    async fn test_secret_service_reports_existence() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::from_paths(&DreamDiaryPaths::with_base(temp_dir.path()));
        assert!(!storage.secret_file_exists().await);
        assert!(storage.load_secrets().await.unwrap().openai.is_none());
    }
}
