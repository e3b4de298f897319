//! English gloss of a Turkish dream narrative, used for illustration prompts.

use super::lowercase;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Word-level Turkish to English dictionary for the keyword fallback.
static TURKISH_TO_ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // work
        ("iş", "job"),
        ("işe", "job"),
        ("şirket", "company"),
        ("ofis", "office"),
        ("çalışma", "work"),
        ("çalışmak", "working"),
        ("toplantı", "meeting"),
        ("yönetici", "manager"),
        ("patron", "boss"),
        ("başarı", "success"),
        ("başarılı", "successful"),
        ("sunum", "presentation"),
        ("staj", "internship"),
        ("mülakat", "interview"),
        ("terfi", "promotion"),
        ("alınmak", "getting hired"),
        ("işe alın", "hiring"),
        ("kabul", "acceptance"),
        ("teklif", "offer"),
        // feelings
        ("mutlu", "happy"),
        ("sevinç", "joy"),
        ("üzgün", "sad"),
        ("korku", "fear"),
        ("endişe", "anxiety"),
        ("kabus", "nightmare"),
        ("heyecan", "excitement"),
        ("şaşkınlık", "surprise"),
        ("öfke", "anger"),
        ("sakin", "calm"),
        ("huzur", "peace"),
        ("sevgi", "love"),
        ("nefret", "hate"),
        ("hoşnut", "pleased"),
        // time
        ("uyanmak", "waking up"),
        ("uyandım", "woke up"),
        ("zaman", "time"),
        ("sonra", "after"),
        ("önce", "before"),
        ("şimdi", "now"),
        ("bugün", "today"),
        ("dün", "yesterday"),
        ("yarın", "tomorrow"),
        ("sabah", "morning"),
        ("akşam", "evening"),
        ("rüya", "dream"),
        ("gerçek", "real"),
        // qualities
        ("uzun", "long"),
        ("kısa", "short"),
        ("büyük", "big"),
        ("küçük", "small"),
        ("hızlı", "fast"),
        ("yavaş", "slow"),
        ("güzel", "beautiful"),
        ("çirkin", "ugly"),
        ("iyi", "good"),
        ("kötü", "bad"),
        ("zor", "difficult"),
        ("kolay", "easy"),
        ("güçlü", "strong"),
        ("zayıf", "weak"),
        // motion
        ("gitmek", "going"),
        ("geldim", "came"),
        ("koşmak", "running"),
        ("yürümek", "walking"),
        ("uçmak", "flying"),
        ("düşmek", "falling"),
        ("yukarı", "up"),
        ("aşağı", "down"),
        ("içeri", "inside"),
        ("dışarı", "outside"),
        // everyday nouns
        ("insan", "person"),
        ("kadın", "woman"),
        ("erkek", "man"),
        ("çocuk", "child"),
        ("aile", "family"),
        ("arkadaş", "friend"),
        ("düşman", "enemy"),
        ("ev", "home"),
        ("araba", "car"),
        ("yol", "road"),
        ("deniz", "sea"),
        ("gökyüzü", "sky"),
        ("bulut", "cloud"),
        ("yağmur", "rain"),
        ("güneş", "sun"),
        ("ay", "moon"),
        ("yıldız", "star"),
        ("gece", "night"),
        ("gündüz", "day"),
        ("su", "water"),
        ("ateş", "fire"),
        ("toprak", "earth"),
        ("hava", "air"),
        ("doğa", "nature"),
        ("hayvan", "animal"),
        ("bitki", "plant"),
        ("ağaç", "tree"),
        ("çiçek", "flower"),
        ("masa", "table"),
        ("sandalye", "chair"),
        ("bina", "building"),
        ("kapı", "door"),
        ("pencere", "window"),
        ("yemek", "food"),
        ("içecek", "drink"),
    ])
});

/// Translates a single Turkish word, if the dictionary knows it.
pub fn translate_word(word: &str) -> Option<&'static str> {
    TURKISH_TO_ENGLISH.get(word).copied()
}

/// Produces a one-sentence English gloss of Turkish dream `content`.
///
/// Tries a fixed decision list of recognisable scenarios (getting hired,
/// flying, falling, nightmare), each adding clauses for telling details.
/// When nothing matches the gloss lists the keywords translated word by
/// word, keeping words the dictionary does not know.
pub fn summarize_turkish(content: &str, keywords: &[String]) -> String {
    let lower = lowercase(content);
    let has = |needle: &str| lower.contains(needle);

    if has("işe") && (has("alın") || has("kabul")) {
        let mut summary = String::from("a dream about getting hired at a company");
        if has("sunum") {
            summary.push_str(" after a successful presentation");
        }
        if has("staj") {
            summary.push_str(" following an internship");
        }
        if has("mülakat") || has("görüşme") {
            summary.push_str(" after an interview");
        }
        if has("mutlu") || has("sevin") {
            summary.push_str(", with feelings of joy and accomplishment");
        }
        summary
    } else if has("uç") && (has("uçmak") || has("uçuyor")) {
        let mut summary = String::from("a dream about flying freely through the air");
        if has("bulut") {
            summary.push_str(" above clouds");
        }
        if has("şehir") || has("kent") {
            summary.push_str(" over a city");
        }
        if has("özgür") {
            summary.push_str(" with a sense of freedom");
        }
        summary
    } else if has("düş") && (has("düşmek") || has("düşüyor")) {
        let mut summary = String::from("a dream about falling from a height");
        if has("uyan") {
            summary.push_str(" and then waking up suddenly");
        }
        if has("korku") || has("endişe") {
            summary.push_str(" with feelings of fear and anxiety");
        }
        summary
    } else if has("kabus") || (has("korku") && has("rüya")) {
        let mut summary = String::from("a nightmare with frightening elements");
        if has("takip") || has("koval") {
            summary.push_str(" involving being chased");
        }
        if has("karanlık") {
            summary.push_str(" in darkness");
        }
        if has("canavar") || has("yaratık") {
            summary.push_str(" by a monster or creature");
        }
        summary
    } else {
        let translated: Vec<&str> = keywords
            .iter()
            .map(|word| translate_word(word).unwrap_or(word.as_str()))
            .collect();
        format!("a dream about {}", translated.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiring_scenario_with_details() {
        let content = "Sunum yaptıktan sonra işe alındım ve çok mutlu oldum";
        assert_eq!(
            summarize_turkish(content, &[]),
            "a dream about getting hired at a company after a successful presentation, with feelings of joy and accomplishment"
        );
    }

    #[test]
    fn test_flying_scenario() {
        let content = "Bulutların üstünde uçuyordum, kendimi özgür hissettim";
        assert_eq!(
            summarize_turkish(content, &[]),
            "a dream about flying freely through the air above clouds with a sense of freedom"
        );
    }

    #[test]
    fn test_nightmare_scenario() {
        let content = "Karanlık bir ormanda bir canavar beni takip ediyordu, tam bir kabustu";
        assert_eq!(
            summarize_turkish(content, &[]),
            "a nightmare with frightening elements involving being chased in darkness by a monster or creature"
        );
    }

    #[test]
    fn test_keyword_fallback_translates_known_words() {
        let keywords = vec!["deniz".to_string(), "kırmızı".to_string(), "araba".to_string()];
        assert_eq!(
            summarize_turkish("Denizde kırmızı bir araba vardı", &keywords),
            "a dream about sea, kırmızı, car"
        );
    }
}
