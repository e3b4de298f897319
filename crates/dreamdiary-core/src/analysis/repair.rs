//! Turns free-form LLM output into a [`DreamAnalysis`].
//!
//! Models asked for JSON frequently wrap it in prose, truncate it, or answer
//! in the wrong language. Parsing therefore runs in three stages:
//!
//! 1. the span from the first `{` to the last `}` is decoded strictly;
//! 2. failing that, each field is pulled out with a regex and missing fields
//!    get a localized placeholder;
//! 3. a recovered analysis whose text carries marker words of the other
//!    language is coerced term by term into the requested language.
//!
//! A strictly decoded answer is returned untouched.

use super::DreamAnalysis;
use crate::text::{Language, lowercase};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

const ENGLISH_MARKERS: &[&str] = &[
    "dream", "fear", "freedom", "escape", "anxiety", "happiness", "sadness", "family", "death",
    "journey", "water", "fire",
];

const TURKISH_MARKERS: &[&str] = &[
    "rüya", "korku", "özgürlük", "kaçış", "kaygı", "mutluluk", "üzüntü", "aile", "ölüm",
    "yolculuk", "su", "ateş",
];

/// (English, Turkish) term pairs. Terms match anywhere inside a word, so
/// inflected forms like "rüyada" or "fears" are coerced too.
const TERMS: &[(&str, &str)] = &[
    ("this dream", "bu rüya"),
    ("psychological", "psikolojik"),
    ("highlighted", "vurgulanan"),
    ("happiness", "mutluluk"),
    ("nightmare", "kabus"),
    ("positive", "olumlu"),
    ("negative", "olumsuz"),
    ("emotions", "duygular"),
    ("analysis", "analiz"),
    ("elements", "öğeler"),
    ("freedom", "özgürlük"),
    ("anxiety", "kaygı"),
    ("sadness", "üzüntü"),
    ("symbols", "semboller"),
    ("escape", "kaçış"),
    ("family", "aile"),
    ("death", "ölüm"),
    ("water", "su"),
    ("dream", "rüya"),
    ("fear", "korku"),
    ("fire", "ateş"),
    ("joy", "sevinç"),
];

/// Which way a [`Coercion`] translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    EnglishToTurkish,
    TurkishToEnglish,
}

/// Case-insensitive substring substitution over one direction of [`TERMS`].
///
/// All terms go into one alternation, longest first, and the text is
/// rewritten in a single pass so a replacement is never matched again.
struct Coercion {
    pattern: Option<Regex>,
    replacements: HashMap<String, &'static str>,
}

impl Coercion {
    fn new(direction: Direction) -> Self {
        let mut pairs: Vec<(&'static str, &'static str)> = TERMS
            .iter()
            .map(|&(en, tr)| match direction {
                Direction::EnglishToTurkish => (en, tr),
                Direction::TurkishToEnglish => (tr, en),
            })
            .collect();
        pairs.sort_by_key(|(from, _)| std::cmp::Reverse(from.chars().count()));

        let alternation = pairs
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match Regex::new(&format!("(?i){alternation}")) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::error!("[Repair] Failed to compile {:?} table: {}", direction, err);
                None
            }
        };

        let replacements = pairs
            .into_iter()
            .map(|(from, to)| (lowercase(from), to))
            .collect();

        Self {
            pattern,
            replacements,
        }
    }

    fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                self.replacements
                    .get(&lowercase(matched))
                    .map(|to| (*to).to_string())
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}

static TO_TURKISH: Lazy<Coercion> = Lazy::new(|| Coercion::new(Direction::EnglishToTurkish));
static TO_ENGLISH: Lazy<Coercion> = Lazy::new(|| Coercion::new(Direction::TurkishToEnglish));

fn contains_marker(analysis: &DreamAnalysis, markers: &[&str]) -> bool {
    let texts: Vec<String> = analysis.texts().map(lowercase).collect();
    markers
        .iter()
        .any(|marker| texts.iter().any(|text| text.contains(marker)))
}

/// True when any field contains one of the English marker terms, even as
/// part of a longer word.
pub fn contains_english(analysis: &DreamAnalysis) -> bool {
    contains_marker(analysis, ENGLISH_MARKERS)
}

/// True when any field contains one of the Turkish marker terms, even as
/// part of a longer word.
pub fn contains_turkish(analysis: &DreamAnalysis) -> bool {
    contains_marker(analysis, TURKISH_MARKERS)
}

/// Rewrites every field of `analysis` into `target`, term by term.
pub fn translate_analysis(analysis: &DreamAnalysis, target: Language) -> DreamAnalysis {
    let coercion: &Coercion = match target {
        Language::Tr => &TO_TURKISH,
        Language::En => &TO_ENGLISH,
    };
    analysis.map_text(|text| coercion.apply(text))
}

struct Placeholders {
    list: &'static str,
    interpretation: &'static str,
    emotional_tone: &'static str,
    perspective: &'static str,
}

fn placeholders(language: Language) -> Placeholders {
    match language {
        Language::Tr => Placeholders {
            list: "Analiz edilemedi",
            interpretation: "Yorumlama yapılamadı",
            emotional_tone: "Belirsiz",
            perspective: "Analiz edilemedi",
        },
        Language::En => Placeholders {
            list: "Could not be analyzed",
            interpretation: "Could not be interpreted",
            emotional_tone: "Uncertain",
            perspective: "Could not be analyzed",
        },
    }
}

fn strict_decode(blob: &str) -> Option<DreamAnalysis> {
    let start = blob.find('{')?;
    let end = blob.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&blob[start..=end]) {
        Ok(analysis) => Some(analysis),
        Err(err) => {
            tracing::warn!(
                "[Repair] Strict JSON decode failed, falling back to field extraction: {}",
                err
            );
            None
        }
    }
}

fn capture(blob: &str, pattern: &str) -> Option<String> {
    let regex = Regex::new(pattern).ok()?;
    regex
        .captures(blob)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_list(blob: &str, key: &str) -> Option<Vec<String>> {
    capture(blob, &format!(r#""{key}"\s*:\s*\[(.*?)\]"#)).map(|inner| {
        inner
            .split(',')
            .map(|item| item.trim().replace('"', ""))
            .filter(|item| !item.is_empty())
            .collect()
    })
}

fn extract_text(blob: &str, key: &str) -> Option<String> {
    capture(blob, &format!(r#""{key}"\s*:\s*"(.*?)""#)).map(|value| value.replace('"', ""))
}

fn extract_fields(blob: &str, language: Language) -> DreamAnalysis {
    let fallback = placeholders(language);
    DreamAnalysis {
        themes: extract_list(blob, "themes").unwrap_or_else(|| vec![fallback.list.to_string()]),
        interpretation: extract_text(blob, "interpretation")
            .unwrap_or_else(|| fallback.interpretation.to_string()),
        emotional_tone: extract_text(blob, "emotionalTone")
            .unwrap_or_else(|| fallback.emotional_tone.to_string()),
        recurring_elements: extract_list(blob, "recurringElements")
            .unwrap_or_else(|| vec![fallback.list.to_string()]),
        psychological_perspective: extract_text(blob, "psychologicalPerspective")
            .unwrap_or_else(|| fallback.perspective.to_string()),
    }
}

/// Parses a raw model answer into an analysis in `language`.
///
/// Never fails: whatever cannot be recovered is filled with placeholders.
pub fn parse_analysis_response(blob: &str, language: Language) -> DreamAnalysis {
    if let Some(analysis) = strict_decode(blob) {
        return analysis;
    }

    let analysis = extract_fields(blob, language);

    match language {
        Language::Tr if contains_english(&analysis) => {
            tracing::warn!("[Repair] Turkish analysis requested but English terms found; coercing");
            translate_analysis(&analysis, Language::Tr)
        }
        Language::En if contains_turkish(&analysis) => {
            tracing::warn!("[Repair] English analysis requested but Turkish terms found; coercing");
            translate_analysis(&analysis, Language::En)
        }
        _ => analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_decode_inside_prose() {
        let blob = r#"Here you go: {"themes":["flight","freedom"],"interpretation":"You want to escape.","emotionalTone":"hopeful","recurringElements":["sky"],"psychologicalPerspective":"Desire for autonomy."} hope this helps"#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(
            analysis,
            DreamAnalysis {
                themes: vec!["flight".into(), "freedom".into()],
                interpretation: "You want to escape.".into(),
                emotional_tone: "hopeful".into(),
                recurring_elements: vec!["sky".into()],
                psychological_perspective: "Desire for autonomy.".into(),
            }
        );
    }

    #[test]
    fn test_strict_decode_skips_coercion() {
        // Turkish marker inside a valid English answer stays as is
        let blob = r#"{"themes":["rüya"],"interpretation":"x","emotionalTone":"y","recurringElements":[],"psychologicalPerspective":"z"}"#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(analysis.themes, vec!["rüya"]);
    }

    #[test]
    fn test_partial_json_gets_placeholders() {
        let blob = r#"{"interpretation": "foo", "themes": "#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(analysis.interpretation, "foo");
        assert_eq!(analysis.themes, vec!["Could not be analyzed"]);
        assert_eq!(analysis.emotional_tone, "Uncertain");
        assert_eq!(analysis.recurring_elements, vec!["Could not be analyzed"]);
        assert_eq!(analysis.psychological_perspective, "Could not be analyzed");
    }

    #[test]
    fn test_turkish_placeholders() {
        let analysis = parse_analysis_response("tamamen bozuk", Language::Tr);
        assert_eq!(analysis.themes, vec!["Analiz edilemedi"]);
        assert_eq!(analysis.interpretation, "Yorumlama yapılamadı");
        assert_eq!(analysis.emotional_tone, "Belirsiz");
        assert_eq!(analysis.psychological_perspective, "Analiz edilemedi");
    }

    #[test]
    fn test_list_items_are_cleaned() {
        let blob = r#"{"themes": [ "fear" , "", "escape" ], "interpretation": "broken"#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(analysis.themes, vec!["fear", "escape"]);
    }

    #[test]
    fn test_english_request_coerces_turkish_terms() {
        let blob = r#"{"themes": ["korku", "aile"], "interpretation": "Bu rüya bir kaçış arzusu""#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(analysis.themes, vec!["fear", "family"]);
        // "su" inside "arzusu" is a term as well
        assert_eq!(analysis.interpretation, "this dream bir escape arzwater");
        assert!(!analysis.interpretation.contains("rüya"));
    }

    #[test]
    fn test_turkish_request_coerces_english_terms() {
        let blob = r#"{"themes": ["Fear", "water"], "emotionalTone": "anxiety""#;
        let analysis = parse_analysis_response(blob, Language::Tr);
        assert_eq!(analysis.themes, vec!["korku", "su"]);
        assert_eq!(analysis.emotional_tone, "kaygı");
    }

    #[test]
    fn test_inflected_turkish_is_coerced_to_english() {
        let blob = r#"{"themes": ["korkular"], "interpretation": "Bu rüyada büyük bir kaygınız var""#;
        let analysis = parse_analysis_response(blob, Language::En);
        assert_eq!(analysis.themes, vec!["fearlar"]);
        assert_eq!(analysis.interpretation, "this dreamda büyük bir anxietynız var");
        assert!(!analysis.interpretation.contains("rüya"));
    }

    #[test]
    fn test_inflected_english_is_coerced_to_turkish() {
        let analysis = DreamAnalysis {
            interpretation: "Dreams of fears and families".into(),
            ..Default::default()
        };
        assert!(contains_english(&analysis));
        let translated = translate_analysis(&analysis, Language::Tr);
        assert_eq!(translated.interpretation, "rüyas of korkus and families");
    }

    #[test]
    fn test_markers_match_inside_words() {
        let analysis = DreamAnalysis {
            themes: vec!["ölümsüzlük".into()],
            ..Default::default()
        };
        assert!(contains_turkish(&analysis));
        assert!(!contains_english(&analysis));
    }

    #[test]
    fn test_longest_term_wins() {
        let analysis = DreamAnalysis {
            interpretation: "Bu rüya olumsuz".into(),
            ..Default::default()
        };
        let translated = translate_analysis(&analysis, Language::En);
        assert_eq!(translated.interpretation, "this dream negative");
    }

    #[test]
    fn test_translate_is_case_insensitive() {
        let analysis = DreamAnalysis {
            psychological_perspective: "RÜYA ve Ölüm".into(),
            ..Default::default()
        };
        assert!(contains_turkish(&analysis));
        let translated = translate_analysis(&analysis, Language::En);
        assert_eq!(translated.psychological_perspective, "dream ve death");
    }
}
