//! Atomic TOML file operations.
//!
//! Writes go to a sibling temp file that is fsynced and renamed over the
//! target, so readers only ever see the old or the new record.

use dreamdiary_core::DreamDiaryError;
use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading or writing a record file.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicTomlError> for DreamDiaryError {
    fn from(e: AtomicTomlError) -> Self {
        match e {
            AtomicTomlError::Io(e) => e.into(),
            AtomicTomlError::Parse(e) => e.into(),
            AtomicTomlError::Serialize(e) => e.into(),
            AtomicTomlError::Lock(msg) => DreamDiaryError::data_access(msg),
        }
    }
}

/// A handle to a TOML file holding one record of type `T`.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    record: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> AtomicTomlFile<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record. A missing or blank file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(toml::from_str(&text)?))
    }

    /// Replaces the record on disk while holding the exclusive lock.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        // A record that fails to serialize must leave the previous file intact.
        let encoded = toml::to_string_pretty(data)?;

        let _guard = FileLock::acquire(&self.path)?;
        let staging = self.temp_path()?;
        {
            let mut out = File::create(&staging)?;
            out.write_all(encoded.as_bytes())?;
            out.sync_all()?;
        }
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    /// Removes the file. A missing file is not an error.
    pub fn remove(&self) -> Result<(), AtomicTomlError> {
        let _guard = FileLock::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// `.<name>.tmp` next to the target, so the rename stays on one filesystem.
    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        match (self.path.parent(), self.path.file_name()) {
            (Some(parent), Some(name)) => {
                Ok(parent.join(format!(".{}.tmp", name.to_string_lossy())))
            }
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Not a file path: {}", self.path.display()),
            )
            .into()),
        }
    }
}

/// Exclusive lock on `<record>.lock`; the lock file is deleted on drop.
struct FileLock {
    _handle: File,
    path: PathBuf,
}

impl FileLock {
    fn acquire(record: &Path) -> Result<Self, AtomicTomlError> {
        if let Some(dir) = record.parent() {
            fs::create_dir_all(dir)?;
        }
        let path = record.with_extension("lock");
        let handle = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        handle
            .lock_exclusive()
            .map_err(|e| AtomicTomlError::Lock(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            _handle: handle,
            path,
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::trace!("[AtomicToml] Lock file {} not removed: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Record>::new(temp_dir.path().join("nested/record.toml"));

        let record = Record {
            name: "sea".to_string(),
            count: 3,
        };
        file.save(&record).unwrap();

        assert_eq!(file.load().unwrap(), Some(record));
    }

    #[test]
    fn test_load_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.toml");
        let file = AtomicTomlFile::<Record>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_no_temp_or_lock_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.toml");
        let file = AtomicTomlFile::<Record>::new(path.clone());

        file.save(&Record {
            name: "x".into(),
            count: 1,
        })
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".record.toml.tmp").exists());
        assert!(!temp_dir.path().join("record.lock").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.toml");
        let file = AtomicTomlFile::<Record>::new(path.clone());

        file.save(&Record {
            name: "x".into(),
            count: 1,
        })
        .unwrap();
        file.remove().unwrap();
        assert!(!path.exists());
        file.remove().unwrap();
    }

    #[test]
    fn test_parse_error_converts_to_serialization() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.toml");
        fs::write(&path, "name = ").unwrap();
        let file = AtomicTomlFile::<Record>::new(path);

        let err: DreamDiaryError = file.load().unwrap_err().into();
        assert!(err.is_serialization());
    }
}
