//! Dream Detail Service
//!
//! Analysis and illustration of a single stored dream. Both operations load
//! the dream, call the external service, then save the whole record once;
//! any failure before that save leaves the stored dream unchanged.

use anyhow::{Context, Result, anyhow};
use dreamdiary_core::DreamDiaryError;
use dreamdiary_core::analysis::DreamAnalyzer;
use dreamdiary_core::dream::{Dream, DreamRepository};
use dreamdiary_core::illustration::{ImageGenerator, ImageStore};
use dreamdiary_core::text::{detect_language, enrich_dream_text};
use std::sync::Arc;
use uuid::Uuid;

/// Analysis and illustration use cases.
///
/// The analyzer and the image generator are attached separately so a caller
/// that only analyzes does not need image service credentials.
pub struct DreamDetailService {
    dreams: Arc<dyn DreamRepository>,
    images: Arc<dyn ImageStore>,
    analyzer: Option<Arc<dyn DreamAnalyzer>>,
    generator: Option<Arc<dyn ImageGenerator>>,
}

impl DreamDetailService {
    pub fn new(dreams: Arc<dyn DreamRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self {
            dreams,
            images,
            analyzer: None,
            generator: None,
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn DreamAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    async fn load(&self, id: &Uuid) -> Result<Dream> {
        self.dreams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DreamDiaryError::not_found("Dream", id.to_string()).into())
    }

    /// Analyzes the dream's content in its detected language and stores the
    /// result on the dream.
    pub async fn analyze(&self, id: &Uuid) -> Result<Dream> {
        let analyzer = self
            .analyzer
            .as_ref()
            .ok_or_else(|| anyhow!("No dream analyzer configured"))?;
        let mut dream = self.load(id).await?;
        let language = detect_language(&dream.content);
        tracing::info!("[DreamDetailService] Analyzing dream {} ({})", id, language);

        let analysis = analyzer
            .analyze(&dream.content, language)
            .await
            .context("Dream analysis failed")?;

        dream.analysis = Some(analysis);
        self.dreams
            .save(&dream)
            .await
            .with_context(|| format!("Failed to save analysis for dream {}", id))?;
        Ok(dream)
    }

    /// Generates an illustration, stores it as JPEG and records its path and
    /// prompt on the dream. A previous illustration file is removed once the
    /// new record is saved.
    pub async fn generate_image(&self, id: &Uuid) -> Result<Dream> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| anyhow!("No image generator configured"))?;
        let mut dream = self.load(id).await?;
        let text = enrich_dream_text(&dream.content, &dream.title, &dream.tags);
        tracing::info!("[DreamDetailService] Generating image for dream {}", id);

        let image = generator
            .generate(&text)
            .await
            .context("Image generation failed")?;
        let path = self
            .images
            .store(&image.bytes)
            .await
            .context("Failed to store generated image")?;

        let previous = dream.generated_image_url.replace(path.to_string_lossy().into_owned());
        dream.image_prompt = Some(image.prompt);

        if let Err(e) = self.dreams.save(&dream).await {
            let orphan = path.to_string_lossy();
            if let Err(remove_err) = self.images.remove(&orphan).await {
                tracing::warn!(
                    "[DreamDetailService] Failed to remove unsaved image {}: {}",
                    orphan,
                    remove_err
                );
            }
            return Err(e).with_context(|| format!("Failed to save image for dream {}", id));
        }

        if let Some(old) = previous.filter(|old| Some(old) != dream.generated_image_url.as_ref()) {
            if let Err(e) = self.images.remove(&old).await {
                tracing::warn!("[DreamDetailService] Failed to remove old image {}: {}", old, e);
            }
        }

        Ok(dream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FakeAnalyzer, FakeGenerator, FakeImageStore, InMemoryDreamRepository,
    };
    use dreamdiary_core::analysis::DreamAnalysis;
    use dreamdiary_core::dream::DreamMood;
    use dreamdiary_core::text::Language;
    use std::sync::atomic::Ordering;

    struct Fixture {
        service: DreamDetailService,
        repo: Arc<InMemoryDreamRepository>,
        analyzer: Arc<FakeAnalyzer>,
        generator: Arc<FakeGenerator>,
        images: Arc<FakeImageStore>,
    }

    fn fixture(
        analyzer: FakeAnalyzer,
        generator: FakeGenerator,
        images: FakeImageStore,
    ) -> Fixture {
        let repo = Arc::new(InMemoryDreamRepository::default());
        let analyzer = Arc::new(analyzer);
        let generator = Arc::new(generator);
        let images = Arc::new(images);
        Fixture {
            service: DreamDetailService::new(repo.clone(), images.clone())
                .with_analyzer(analyzer.clone())
                .with_generator(generator.clone()),
            repo,
            analyzer,
            generator,
            images,
        }
    }

    fn sample_analysis() -> DreamAnalysis {
        DreamAnalysis {
            themes: vec!["freedom".into()],
            interpretation: "A longing for escape.".into(),
            emotional_tone: "hopeful".into(),
            recurring_elements: vec!["sky".into()],
            psychological_perspective: "Growth.".into(),
        }
    }

    async fn stored(repo: &InMemoryDreamRepository, dream: Dream) -> Dream {
        repo.save(&dream).await.unwrap();
        dream
    }

    #[tokio::test]
    async fn test_analyze_attaches_analysis_in_detected_language() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore::default(),
        );
        let dream = stored(
            &f.repo,
            Dream::new("Uçuş", "Gökyüzünde uçuyordum ve çok mutluydum", DreamMood::Positive),
        )
        .await;

        let updated = f.service.analyze(&dream.id).await.unwrap();

        assert_eq!(updated.analysis, Some(sample_analysis()));
        assert_eq!(f.repo.stored(&dream.id).unwrap().analysis, Some(sample_analysis()));
        assert_eq!(*f.analyzer.seen.lock().unwrap(), vec![Language::Tr]);
    }

    #[tokio::test]
    async fn test_analyze_failure_leaves_dream_untouched() {
        let f = fixture(
            FakeAnalyzer::failing("HTTP 500: boom"),
            FakeGenerator::new(false),
            FakeImageStore::default(),
        );
        let dream = stored(&f.repo, Dream::new("Fall", "I was falling", DreamMood::Scary)).await;

        let err = f.service.analyze(&dream.id).await.unwrap_err();

        assert!(format!("{:#}", err).contains("HTTP 500: boom"));
        assert_eq!(f.repo.stored(&dream.id).unwrap(), dream);
    }

    #[tokio::test]
    async fn test_analyze_unknown_dream() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore::default(),
        );
        let err = f.service.analyze(&Uuid::new_v4()).await.unwrap_err();
        assert!(err.downcast_ref::<DreamDiaryError>().unwrap().is_not_found());
        assert!(f.analyzer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_collaborators_are_reported() {
        let repo = Arc::new(InMemoryDreamRepository::default());
        let dream = stored(&repo, Dream::new("Fog", "fog", DreamMood::Neutral)).await;
        let service = DreamDetailService::new(repo.clone(), Arc::new(FakeImageStore::default()));

        let err = service.analyze(&dream.id).await.unwrap_err();
        assert_eq!(err.to_string(), "No dream analyzer configured");
        let err = service.generate_image(&dream.id).await.unwrap_err();
        assert_eq!(err.to_string(), "No image generator configured");
    }

    #[tokio::test]
    async fn test_generate_image_records_prompt_and_path() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore::default(),
        );
        let dream = stored(
            &f.repo,
            Dream::new("Lighthouse", "A lighthouse in fog", DreamMood::Neutral)
                .with_tags(vec!["sea".into()]),
        )
        .await;

        let updated = f.service.generate_image(&dream.id).await.unwrap();

        let sent = f.generator.texts.lock().unwrap()[0].clone();
        assert_eq!(sent, "Lighthouse: A lighthouse in fog\n\nKey elements: sea");

        assert_eq!(updated.generated_image_url.as_deref(), Some("/images/3.jpg"));
        assert_eq!(updated.image_prompt, Some(format!("prompt for {sent}")));
        assert_eq!(f.repo.stored(&dream.id).unwrap(), updated);
    }

    #[tokio::test]
    async fn test_generate_image_replaces_previous_file() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore::default(),
        );
        let mut dream = Dream::new("Owl", "An owl", DreamMood::Neutral);
        dream.generated_image_url = Some("/images/old.jpg".into());
        let dream = stored(&f.repo, dream).await;

        f.service.generate_image(&dream.id).await.unwrap();

        assert_eq!(*f.images.removed.lock().unwrap(), vec!["/images/old.jpg"]);
    }

    #[tokio::test]
    async fn test_generate_image_failures_leave_dream_untouched() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(true),
            FakeImageStore::default(),
        );
        let dream = stored(&f.repo, Dream::new("Rain", "rain", DreamMood::Negative)).await;
        assert!(f.service.generate_image(&dream.id).await.is_err());
        assert_eq!(f.repo.stored(&dream.id).unwrap(), dream);

        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore {
                fail: true,
                ..Default::default()
            },
        );
        let dream = stored(&f.repo, Dream::new("Rain", "rain", DreamMood::Negative)).await;
        let err = f.service.generate_image(&dream.id).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Image decode failed"));
        assert_eq!(f.repo.stored(&dream.id).unwrap(), dream);
    }

    #[tokio::test]
    async fn test_save_failure_discards_new_image() {
        let f = fixture(
            FakeAnalyzer::ok(sample_analysis()),
            FakeGenerator::new(false),
            FakeImageStore {
                fail_removes: true,
                ..Default::default()
            },
        );
        let dream = stored(&f.repo, Dream::new("Moon", "a red moon", DreamMood::Confusing)).await;
        f.repo.fail_saves.store(true, Ordering::SeqCst);

        let err = f.service.generate_image(&dream.id).await.unwrap_err();

        // the save error is reported even though cleanup failed too
        assert!(format!("{:#}", err).contains("disk full"));
        assert_eq!(*f.images.removed.lock().unwrap(), vec!["/images/3.jpg"]);
        assert_eq!(f.repo.stored(&dream.id).unwrap(), dream);
    }
}
