//! Frequency-ranked keyword extraction.

use super::language::Language;
use super::lowercase;
use std::collections::HashMap;

const TURKISH_STOPWORDS: &[&str] = &[
    "ve", "ile", "bir", "bu", "şu", "o", "da", "de", "ki", "mi", "mı", "mu", "mü", "için", "gibi",
    "kadar", "daha", "çok", "en", "ama", "fakat", "lakin", "ancak", "veya", "yahut", "birlikte",
    "beraber", "sadece", "yalnız", "tek", "ise", "değil", "oldu", "oldum", "oldun", "olmuş", "ben",
    "sen", "biz", "siz", "onlar", "beni", "seni", "onu", "bizi", "sizi", "onları", "bana", "sana",
    "ona", "bize", "size", "onlara", "sanki", "acaba", "belki", "evet", "hayır", "tamam", "peki",
    "yani", "işte", "öyle", "böyle", "şöyle", "dolayı", "önce", "sonra", "diye", "üzere", "rağmen",
    "göre", "karşı", "doğru", "herhangi", "hiçbir", "her",
];

const ENGLISH_STOPWORDS: &[&str] = &[
    "and", "with", "a", "the", "in", "of", "to", "for", "like", "very", "after", "before", "was",
    "were", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "these", "those", "am", "is", "are", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "would", "should", "could", "ought",
    "because", "since", "while", "until", "whenever", "wherever", "whether", "though", "although",
    "even", "cannot",
];

/// Stopwords of the short list used by the illustration prompt builder,
/// regardless of language.
const MIXED_STOPWORDS: &[&str] = &[
    "ve", "ile", "bir", "bu", "da", "de", "için", "gibi", "çok", "kadar", "sonra", "önce",
];

/// Which stopword list to filter with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopwords {
    /// Full list for the given language
    Language(Language),
    /// Short Turkish-only list
    Mixed,
}

impl Stopwords {
    fn words(self) -> &'static [&'static str] {
        match self {
            Stopwords::Language(Language::Tr) => TURKISH_STOPWORDS,
            Stopwords::Language(Language::En) => ENGLISH_STOPWORDS,
            Stopwords::Mixed => MIXED_STOPWORDS,
        }
    }
}

/// Tuning knobs for [`extract_keywords`].
#[derive(Debug, Clone, Copy)]
pub struct KeywordOptions {
    /// Maximum number of keywords returned
    pub limit: usize,
    /// Minimum token length in characters
    pub min_len: usize,
    pub stopwords: Stopwords,
}

impl KeywordOptions {
    /// Ten keywords of at least three characters, filtered with the full
    /// stopword list of `language`.
    pub fn for_language(language: Language) -> Self {
        Self {
            limit: 10,
            min_len: 3,
            stopwords: Stopwords::Language(language),
        }
    }

    /// Six keywords of at least four characters with the short list.
    pub fn compact() -> Self {
        Self {
            limit: 6,
            min_len: 4,
            stopwords: Stopwords::Mixed,
        }
    }
}

/// Extracts the most salient words of `text`.
///
/// Tokens are lowercased, everything but letters and digits becomes a
/// separator, short tokens and stopwords are dropped. Remaining tokens are
/// ranked by frequency, then by length, then by first appearance.
pub fn extract_keywords(text: &str, options: KeywordOptions) -> Vec<String> {
    let stopwords = options.stopwords.words();

    let cleaned: String = lowercase(text)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    // (count, first index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, token) in cleaned.split_whitespace().enumerate() {
        if token.chars().count() < options.min_len || stopwords.contains(&token) {
            continue;
        }
        counts.entry(token).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
            .then_with(|| a.2.cmp(&b.2))
    });

    ranked
        .into_iter()
        .take(options.limit)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_long_word_ranks_first() {
        let text = "The lighthouse was dark. I saw a cat, then the lighthouse again.";
        let keywords = extract_keywords(text, KeywordOptions::for_language(Language::En));
        assert_eq!(keywords.first().map(String::as_str), Some("lighthouse"));
        assert!(keywords.contains(&"cat".to_string()));
    }

    #[test]
    fn test_length_breaks_frequency_ties() {
        let text = "sun mountain river";
        let keywords = extract_keywords(text, KeywordOptions::for_language(Language::En));
        assert_eq!(keywords, vec!["mountain", "river", "sun"]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_dropped() {
        let text = "I was with them in the garden";
        let keywords = extract_keywords(text, KeywordOptions::for_language(Language::En));
        assert_eq!(keywords, vec!["garden"]);
    }

    #[test]
    fn test_turkish_letters_are_kept() {
        let text = "Gökyüzünde uçuyordum, gökyüzünde kuşlar vardı.";
        let keywords = extract_keywords(text, KeywordOptions::for_language(Language::Tr));
        assert_eq!(keywords.first().map(String::as_str), Some("gökyüzünde"));
        assert!(keywords.contains(&"uçuyordum".to_string()));
    }

    #[test]
    fn test_dotted_capital_i_does_not_split_words() {
        let text = "İstanbul sokaklarında yürüdüm";
        let keywords = extract_keywords(text, KeywordOptions::for_language(Language::Tr));
        assert!(keywords.contains(&"istanbul".to_string()));
    }

    #[test]
    fn test_limit_applies() {
        let text = "alpha bravo charlie delta echoes foxtrot golfer hotel";
        let keywords = extract_keywords(text, KeywordOptions::compact());
        assert_eq!(
            keywords,
            vec!["charlie", "foxtrot", "echoes", "golfer", "alpha", "bravo"]
        );
    }
}
