//! Turkish / English language detection.

use super::lowercase;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Language of a dream narrative or of a requested analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Turkish (`tr`)
    Tr,
    /// English (`en`), the fallback when nothing Turkish is found
    #[default]
    En,
}

impl Language {
    /// Two-letter language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    pub fn is_turkish(self) -> bool {
        self == Language::Tr
    }
}

/// Letters that only occur in Turkish among the two supported languages.
const TURKISH_LETTERS: [char; 12] = [
    'ı', 'ğ', 'ü', 'ş', 'ç', 'ö', 'İ', 'Ğ', 'Ü', 'Ş', 'Ç', 'Ö',
];

/// Function words checked by [`detect_language`], in scan order.
const FUNCTION_WORDS: [&str; 14] = [
    "bir", "ve", "ile", "bu", "çok", "için", "ama", "ben", "sen", "biz", "siz", "rüya", "gördüm",
    "kabus",
];

/// Extended word list used by [`is_turkish`] for image prompts.
const EXTENDED_WORDS: &[&str] = &[
    "bir", "ve", "ile", "bu", "çok", "için", "ama", "ben", "sen", "biz", "siz", "rüya", "gördüm",
    "kabus", "sonra", "önce", "şimdi", "sanki", "gibi", "aslında", "var", "yok", "oldu", "gitti",
    "geldi", "etti", "içinde", "dışında", "üstünde", "altında", "yanında", "karşısında",
    "arasında", "beraber", "birlikte", "ardından", "tarafından", "dolayı", "hakkında", "kadar",
    "rağmen", "göre", "fakat", "lakin", "ancak", "oysa", "oysaki", "halbuki", "nasıl", "neden",
    "niçin", "kim", "hangi", "ne", "nerede", "nezaman", "kişi", "insan", "kadın", "erkek",
    "çocuk",
];

fn has_turkish_letter(text: &str) -> bool {
    text.chars().any(|c| TURKISH_LETTERS.contains(&c))
}

/// Detects whether `text` is Turkish or English.
///
/// Any Turkish-only letter decides immediately. Otherwise the lowercased text
/// is scanned for a fixed list of Turkish function words standing as whole
/// words: surrounded by spaces, at the start followed by a space, followed by
/// a full stop, or making up the entire text. The first hit wins; no hit
/// means English.
pub fn detect_language(text: &str) -> Language {
    if has_turkish_letter(text) {
        return Language::Tr;
    }

    let lower = lowercase(text);
    let hit = FUNCTION_WORDS
        .iter()
        .any(|word| stands_alone(&lower, word));

    if hit { Language::Tr } else { Language::En }
}

fn stands_alone(lower: &str, word: &str) -> bool {
    lower.contains(&format!(" {word} "))
        || lower.starts_with(&format!("{word} "))
        || lower.contains(&format!(" {word}."))
        || lower == word
}

/// Broader Turkish check used when building image prompts.
///
/// Besides the letter test it compares every whitespace-separated token,
/// with surrounding punctuation trimmed, against an extended word list, and
/// also accepts a listed word at the very end of the text.
pub fn is_turkish(text: &str) -> bool {
    if has_turkish_letter(text) {
        return true;
    }

    let lower = lowercase(text);

    let token_hit = lower
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .any(|token| EXTENDED_WORDS.contains(&token));
    if token_hit {
        return true;
    }

    EXTENDED_WORDS.iter().any(|word| {
        stands_alone(&lower, word) || lower.ends_with(&format!(" {word}"))
    })
}
