//! JPEG image store for generated illustrations.

use async_trait::async_trait;
use dreamdiary_core::error::{DreamDiaryError, Result};
use dreamdiary_core::illustration::ImageStore;
use image::codecs::jpeg::JpegEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use uuid::Uuid;

/// JPEG quality used when re-encoding.
pub const JPEG_QUALITY: u8 = 90;

/// Writes every image as `<uuid>.jpg` under one directory.
///
/// Incoming bytes may be PNG, JPEG or WebP; they are decoded and re-encoded
/// so the directory only ever holds JPEG files.
pub struct JpegImageStore {
    images_dir: PathBuf,
}

impl JpegImageStore {
    pub fn new(images_dir: impl AsRef<Path>) -> Self {
        Self {
            images_dir: images_dir.as_ref().to_path_buf(),
        }
    }

    fn store_sync(dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
        let decoded = image::load_from_memory(bytes).map_err(|e| {
            DreamDiaryError::agent(format!("Generated image could not be decoded: {}", e))
        })?;

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(&decoded.to_rgb8())
            .map_err(|e| DreamDiaryError::internal(format!("JPEG encoding failed: {}", e)))?;

        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.jpg", Uuid::new_v4()));
        fs::write(&path, jpeg)?;

        tracing::info!("[ImageStore] Saved illustration to {}", path.display());
        Ok(path)
    }
}

#[async_trait]
impl ImageStore for JpegImageStore {
    async fn store(&self, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.images_dir.clone();
        let bytes = bytes.to_vec();
        task::spawn_blocking(move || Self::store_sync(&dir, &bytes))
            .await
            .map_err(|e| DreamDiaryError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn remove(&self, path: &str) -> Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
