//! Heuristic text pipeline for dream narratives.
//!
//! Everything here is a pure function over strings: language detection,
//! keyword extraction, tone and theme scoring, the Turkish gloss used for
//! image prompts, and the prompt templates themselves.

pub mod classify;
pub mod keywords;
pub mod language;
pub mod prompt;
pub mod summary;

pub use classify::{ThemeTag, ToneTag, classify_theme, classify_tone};
pub use keywords::{KeywordOptions, Stopwords, extract_keywords};
pub use language::{Language, detect_language, is_turkish};
pub use prompt::{
    ImagePromptInput, analysis_prompt, build_image_prompt, enrich_dream_text, image_prompt,
    simple_image_prompt,
};
pub use summary::summarize_turkish;

/// Lowercases `text`, folding the Turkish dotted capital `İ` to a plain `i`
/// instead of `i` followed by a combining dot.
pub fn lowercase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == 'İ' {
            out.push('i');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_folds_dotted_capital_i() {
        assert_eq!(lowercase("İZMİR Gece"), "izmir gece");
        assert_eq!(lowercase("ŞÇĞÜÖ"), "şçğüö");
    }
}
