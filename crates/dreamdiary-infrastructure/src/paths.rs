//! Unified path management for DreamDiary files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/dreamdiary/          # Config directory
//! ├── settings.toml              # User preferences
//! └── secret.json                # API keys and service endpoints
//!
//! ~/.local/share/dreamdiary/     # Data directory
//! ├── dreams/                    # One TOML file per dream
//! │   └── <dream-id>.toml
//! ├── images/                    # Generated illustrations
//! │   └── <uuid>.jpg
//! └── logs/                      # Application logs
//!     └── dreamdiary.log.YYYY-MM-DD
//! ```
//!
//! When a base directory is given (the CLI `--data-dir` flag, or a temp dir in
//! tests) both trees collapse into that single directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "dreamdiary";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for dreamdiary_core::DreamDiaryError {
    fn from(err: PathError) -> Self {
        dreamdiary_core::DreamDiaryError::config(err.to_string())
    }
}

/// Resolved locations of every file the application touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DreamDiaryPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl DreamDiaryPaths {
    /// Resolves paths under `base` when given, otherwise under the platform's
    /// config and data directories.
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        match base {
            Some(base) => Ok(Self::with_base(base)),
            None => {
                let config_dir = dirs::config_dir()
                    .ok_or(PathError::HomeDirNotFound)?
                    .join(APP_DIR);
                let data_dir = dirs::data_dir()
                    .ok_or(PathError::HomeDirNotFound)?
                    .join(APP_DIR);
                Ok(Self {
                    config_dir,
                    data_dir,
                })
            }
        }
    }

    /// Places everything under a single directory.
    pub fn with_base(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        Self {
            config_dir: base.clone(),
            data_dir: base,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `secret.json`. Keep its permissions at 600.
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join("secret.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    pub fn dreams_dir(&self) -> PathBuf {
        self.data_dir.join("dreams")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
