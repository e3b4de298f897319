//! In-memory fakes shared by the use-case tests.

use async_trait::async_trait;
use dreamdiary_core::analysis::{DreamAnalysis, DreamAnalyzer};
use dreamdiary_core::dream::{Dream, DreamRepository};
use dreamdiary_core::illustration::{GeneratedImage, ImageGenerator, ImageStore};
use dreamdiary_core::settings::{Settings, SettingsRepository};
use dreamdiary_core::text::Language;
use dreamdiary_core::{DreamDiaryError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryDreamRepository {
    dreams: Mutex<HashMap<Uuid, Dream>>,
    /// Once set, every `save` fails.
    pub fail_saves: AtomicBool,
}

impl InMemoryDreamRepository {
    pub fn stored(&self, id: &Uuid) -> Option<Dream> {
        self.dreams.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl DreamRepository for InMemoryDreamRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dream>> {
        Ok(self.stored(id))
    }

    async fn save(&self, dream: &Dream) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DreamDiaryError::data_access("disk full"));
        }
        self.dreams.lock().unwrap().insert(dream.id, dream.clone());
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        self.dreams.lock().unwrap().remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Dream>> {
        Ok(self.dreams.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: Mutex<Option<Settings>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> Result<Settings> {
        Ok(self.settings.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

/// Returns a canned analysis and records the language it was asked for.
pub struct FakeAnalyzer {
    pub result: std::result::Result<DreamAnalysis, String>,
    pub seen: Mutex<Vec<Language>>,
}

impl FakeAnalyzer {
    pub fn ok(analysis: DreamAnalysis) -> Self {
        Self {
            result: Ok(analysis),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DreamAnalyzer for FakeAnalyzer {
    async fn analyze(&self, _content: &str, language: Language) -> Result<DreamAnalysis> {
        self.seen.lock().unwrap().push(language);
        self.result.clone().map_err(DreamDiaryError::agent)
    }
}

/// Echoes the input text back as the prompt.
pub struct FakeGenerator {
    pub fail: bool,
    pub texts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            texts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, text: &str) -> Result<GeneratedImage> {
        self.texts.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(DreamDiaryError::agent("HTTP 503: model loading"));
        }
        Ok(GeneratedImage {
            bytes: vec![1, 2, 3],
            prompt: format!("prompt for {text}"),
        })
    }
}

#[derive(Default)]
pub struct FakeImageStore {
    pub fail: bool,
    pub fail_removes: bool,
    pub removed: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn store(&self, bytes: &[u8]) -> Result<PathBuf> {
        if self.fail {
            return Err(DreamDiaryError::agent("Image decode failed"));
        }
        Ok(PathBuf::from(format!("/images/{}.jpg", bytes.len())))
    }

    async fn remove(&self, path: &str) -> Result<()> {
        self.removed.lock().unwrap().push(path.to_string());
        if self.fail_removes {
            return Err(DreamDiaryError::io("permission denied"));
        }
        Ok(())
    }
}
