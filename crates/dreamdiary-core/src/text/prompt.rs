//! Prompt templates for the analysis and illustration services.

use super::classify::{ThemeTag, ToneTag, classify_theme, classify_tone};
use super::keywords::{KeywordOptions, extract_keywords};
use super::language::{Language, is_turkish};
use super::lowercase;
use super::summary::summarize_turkish;
use crate::error::Result;
use minijinja::{Environment, context};
use once_cell::sync::Lazy;

const ANALYSIS_TR: &str = r#"Sen profesyonel bir rüya analiz uzmanısın.

Aşağıdaki rüya anlatımını analiz et ve şu kategorilerde bilgi ver:
1. Temalar: Rüyanın ana temalarını belirle (örn. korku, özgürlük, kaçış)
2. Yorumlama: Rüyanın genel bir yorumu
3. Duygusal Ton: Rüya anlatımındaki duygu tonunu belirle
4. Vurgulanan Öğeler: Metin içinde birden fazla kez geçen sembol veya öğeler (eğer yoksa boş bırakın)
5. Psikolojik Perspektif: Rüyanın psikolojik açıdan yorumu

Rüya Anlatımı: {{ content }}

ÖNEMLİ: Cevabını TAMAMEN TÜRKÇE olarak ver, hiçbir İngilizce kelime kullanma.
Bütün kategorilere mutlaka cevap ver ve boş bırakma.

Yanıtını JSON formatında ver, sadece şu şekilde:
{
  "themes": ["tema1", "tema2", ...],
  "interpretation": "Yorumlama metni",
  "emotionalTone": "Duygusal ton tanımı",
  "recurringElements": ["öğe1", "öğe2", ...],
  "psychologicalPerspective": "Psikolojik perspektif açıklaması"
}"#;

const ANALYSIS_EN: &str = r#"You are a professional dream analyst.

Analyze the following dream and provide information in these categories:
1. Themes: Identify the main themes of the dream (e.g., fear, freedom, escape)
2. Interpretation: A general interpretation of the dream
3. Emotional Tone: Identify the emotional tone in the dream narrative
4. Recurring Elements: Recurring symbols or elements, if any
5. Psychological Perspective: Psychological perspective of the dream

Dream Narrative: {{ content }}

IMPORTANT: Give your answer COMPLETELY IN ENGLISH, do not use any other language.
Be sure to answer all categories and don't leave any blank.

Provide your answer in JSON format, exactly as follows:
{
  "themes": ["theme1", "theme2", ...],
  "interpretation": "Interpretation text",
  "emotionalTone": "Emotional tone description",
  "recurringElements": ["element1", "element2", ...],
  "psychologicalPerspective": "Psychological perspective description"
}"#;

const IMAGE_EN: &str = r#"Create a photorealistic and evocative visualization of this dream: {{ summary }}

Primary theme: {{ theme }}
Key elements to emphasize: {{ keywords }}
Emotional quality: {{ tone }}
Visual style: {{ style }}

{{ guidance }}"#;

const IMAGE_TR: &str = r#"Create a photorealistic and evocative visualization of {{ summary }}.

Primary theme: {{ theme }}
Emotional quality: {{ tone }}
Visual style: {{ style }}

{{ guidance }}"#;

const IMAGE_COMPACT: &str = r#"A photorealistic dream scene with the following elements prominently featured: {{ keywords }}.
The dream shows: {{ content }}.
Emotional tone: {{ tone }}.
Style: {{ style }}.
Amazing dream visualization, ultra detailed, 8k resolution."#;

const IMAGE_STYLE: &str = "cinematic quality, professional lighting, vivid colors, highly detailed, 4K, dreamy atmosphere, visual metaphors";

const COMPACT_STYLE: &str = "cinematic, detailed, dramatic lighting, hyperrealistic dream state";

const IMAGE_GUIDANCE: &str = "The scene should have dreamlike qualities with vivid symbolism and slightly surreal elements that evoke the subconscious mind.

Important visual elements to include:
- Strong metaphorical representation of the dream's central emotion
- Dramatic lighting that enhances the mood
- Rich color palette appropriate to the emotional tone
- Dream-like atmosphere with subtle distortions of reality
- Cinematic composition with emphasis on the main subject

The image must NOT contain any text, words, labels, captions, or writing of any kind.
Create a completely realistic, photographic image, not a cartoon or illustration.";

/// Maximum number of characters of an English narrative embedded verbatim.
pub const CONTENT_SUMMARY_LIMIT: usize = 200;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in [
        ("analysis_tr", ANALYSIS_TR),
        ("analysis_en", ANALYSIS_EN),
        ("image_en", IMAGE_EN),
        ("image_tr", IMAGE_TR),
        ("image_compact", IMAGE_COMPACT),
    ] {
        if let Err(err) = env.add_template(name, source) {
            tracing::error!("Failed to register prompt template {}: {}", name, err);
        }
    }
    env
});

fn render(name: &str, ctx: minijinja::Value) -> Result<String> {
    let template = TEMPLATES.get_template(name)?;
    Ok(template.render(ctx)?)
}

/// Builds the chat-style instruction prompt sent to the analysis service.
pub fn analysis_prompt(language: Language, content: &str) -> Result<String> {
    let name = match language {
        Language::Tr => "analysis_tr",
        Language::En => "analysis_en",
    };
    render(name, context! { content => content })
}

/// Everything the illustration prompt is assembled from.
#[derive(Debug, Clone)]
pub struct ImagePromptInput<'a> {
    pub content: &'a str,
    pub keywords: &'a [String],
    pub tone: ToneTag,
    pub theme: ThemeTag,
    pub language: Language,
}

impl<'a> ImagePromptInput<'a> {
    /// Runs the text pipeline over `content` with precomputed `keywords`.
    pub fn analyze(content: &'a str, keywords: &'a [String], language: Language) -> Self {
        Self {
            content,
            keywords,
            tone: classify_tone(content, language),
            theme: classify_theme(content, language),
            language,
        }
    }
}

/// Renders the detailed illustration prompt.
///
/// English narratives are embedded directly (cut to
/// [`CONTENT_SUMMARY_LIMIT`] characters); Turkish ones are replaced by their
/// English gloss so the image model only sees English.
pub fn image_prompt(input: &ImagePromptInput<'_>) -> Result<String> {
    match input.language {
        Language::Tr => render(
            "image_tr",
            context! {
                summary => summarize_turkish(input.content, input.keywords),
                theme => input.theme.descriptor(),
                tone => input.tone.descriptor(),
                style => IMAGE_STYLE,
                guidance => IMAGE_GUIDANCE,
            },
        ),
        Language::En => render(
            "image_en",
            context! {
                summary => truncate_content(input.content),
                theme => input.theme.descriptor(),
                keywords => input.keywords.join(", "),
                tone => input.tone.descriptor(),
                style => IMAGE_STYLE,
                guidance => IMAGE_GUIDANCE,
            },
        ),
    }
}

/// Full pipeline for the detailed illustration prompt: detect language,
/// extract ten keywords, classify tone and theme, render.
pub fn build_image_prompt(content: &str) -> Result<String> {
    let language = if is_turkish(content) {
        Language::Tr
    } else {
        Language::En
    };
    let keywords = extract_keywords(content, KeywordOptions::for_language(language));
    let input = ImagePromptInput::analyze(content, &keywords, language);
    image_prompt(&input)
}

/// Short illustration prompt with its own coarse tone cascade.
///
/// `keywords` normally come from [`KeywordOptions::compact`].
pub fn simple_image_prompt(content: &str, keywords: &[String]) -> Result<String> {
    render(
        "image_compact",
        context! {
            keywords => keywords.join(", "),
            content => content,
            tone => compact_tone(content),
            style => COMPACT_STYLE,
        },
    )
}

fn compact_tone(content: &str) -> &'static str {
    let lower = lowercase(content);
    let any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if any(&["korku", "kabus", "ürkütücü"]) {
        "dark, ominous, haunting, nightmare, scary"
    } else if any(&["mutlu", "sevinç", "güzel"]) {
        "happy, peaceful, serene, pleasant, beautiful"
    } else if any(&["tuhaf", "garip", "acayip"]) {
        "surreal, bizarre, strange, odd, unsettling"
    } else if any(&["uçmak", "uçuyorum", "özgür"]) {
        "floating, weightless, freedom, flying, soaring"
    } else {
        "dreamlike, ethereal, mystical, subconscious"
    }
}

fn truncate_content(content: &str) -> String {
    if content.chars().count() > CONTENT_SUMMARY_LIMIT {
        let head: String = content.chars().take(CONTENT_SUMMARY_LIMIT).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

/// Folds the title and tags of a dream into the text sent for illustration.
///
/// The title is prefixed when it is non-empty and not already part of the
/// content; tags are appended as a "Key elements" line.
pub fn enrich_dream_text(content: &str, title: &str, tags: &[String]) -> String {
    let mut enriched = if !title.is_empty() && !content.contains(title) {
        format!("{title}: {content}")
    } else {
        content.to_string()
    };

    if !tags.is_empty() {
        enriched.push_str("\n\nKey elements: ");
        enriched.push_str(&tags.join(", "));
    }

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_register() {
        for name in ["analysis_tr", "analysis_en", "image_en", "image_tr", "image_compact"] {
            assert!(TEMPLATES.get_template(name).is_ok(), "missing template {name}");
        }
    }

    #[test]
    fn test_analysis_prompt_by_language() {
        let en = analysis_prompt(Language::En, "I was flying").unwrap();
        assert!(en.starts_with("You are a professional dream analyst."));
        assert!(en.contains("Dream Narrative: I was flying"));
        assert!(en.contains("\"psychologicalPerspective\""));

        let tr = analysis_prompt(Language::Tr, "Uçuyordum").unwrap();
        assert!(tr.contains("Rüya Anlatımı: Uçuyordum"));
        assert!(tr.contains("TAMAMEN TÜRKÇE"));
    }

    #[test]
    fn test_analysis_prompt_does_not_escape_content() {
        let prompt = analysis_prompt(Language::En, "a <door> & \"key\"").unwrap();
        assert!(prompt.contains("Dream Narrative: a <door> & \"key\""));
    }

    #[test]
    fn test_english_image_prompt_truncates_long_content() {
        let content = "x".repeat(250);
        let keywords = vec!["door".to_string(), "ocean".to_string()];
        let input = ImagePromptInput::analyze(&content, &keywords, Language::En);
        let prompt = image_prompt(&input).unwrap();
        assert!(prompt.contains(&format!("{}...", "x".repeat(200))));
        assert!(!prompt.contains(&"x".repeat(201)));
        assert!(prompt.contains("Key elements to emphasize: door, ocean"));
        assert!(prompt.contains(ThemeTag::Default.descriptor()));
    }

    #[test]
    fn test_turkish_image_prompt_uses_gloss() {
        let prompt = build_image_prompt("Bulutların üstünde uçuyordum").unwrap();
        assert!(prompt.starts_with(
            "Create a photorealistic and evocative visualization of a dream about flying freely through the air above clouds."
        ));
        assert!(!prompt.contains("Key elements to emphasize"));
        assert!(prompt.contains(ThemeTag::Flying.descriptor()));
    }

    #[test]
    fn test_simple_prompt_tone_cascade() {
        let content = "Korkunç bir kabus gördüm";
        let keywords = extract_keywords(content, KeywordOptions::compact());
        let prompt = simple_image_prompt(content, &keywords).unwrap();
        assert!(prompt.starts_with(
            "A photorealistic dream scene with the following elements prominently featured: korkunç, gördüm, kabus."
        ));
        assert!(prompt.contains("Emotional tone: dark, ominous, haunting, nightmare, scary."));
        assert!(prompt.contains("The dream shows: Korkunç bir kabus gördüm."));
    }

    #[test]
    fn test_enrich_dream_text() {
        let tags = vec!["sea".to_string(), "boat".to_string()];
        assert_eq!(
            enrich_dream_text("I sailed away", "Voyage", &tags),
            "Voyage: I sailed away\n\nKey elements: sea, boat"
        );
        assert_eq!(
            enrich_dream_text("The Voyage began", "Voyage", &[]),
            "The Voyage began"
        );
        assert_eq!(enrich_dream_text("Quiet night", "", &[]), "Quiet night");
    }
}
