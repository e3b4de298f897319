//! Keyword-scoring classifiers for emotional tone and dream theme.
//!
//! Each category owns a fixed keyword list per language. A category scores
//! one point per keyword found as a substring of the lowercased text. The
//! highest score wins, ties go to the category declared first, and a text
//! that scores zero everywhere falls back to `Default`.

use super::language::Language;
use super::lowercase;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Emotional tone of a dream narrative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToneTag {
    Fear,
    Happiness,
    Sadness,
    Surprise,
    Anger,
    Freedom,
    Work,
    Default,
}

impl ToneTag {
    fn keywords(self, language: Language) -> &'static [&'static str] {
        match (self, language) {
            (ToneTag::Fear, Language::Tr) => &[
                "korku", "kabus", "ürkütücü", "dehşet", "korkunç", "korkutucu", "ürpertici",
                "tedirgin", "endişe", "panik", "terör", "kâbus",
            ],
            (ToneTag::Happiness, Language::Tr) => &[
                "mutlu", "sevinç", "güzel", "harika", "muhteşem", "keyif", "neşe", "huzur",
                "memnun", "sevgi", "aşk", "hoş", "olumlu",
            ],
            (ToneTag::Sadness, Language::Tr) => &[
                "üzgün", "keder", "hüzün", "acı", "mutsuz", "gözyaşı", "ağlamak", "yas",
                "depresif", "melankolik", "çaresiz",
            ],
            (ToneTag::Surprise, Language::Tr) => &[
                "şaşırtıcı", "tuhaf", "garip", "acayip", "şaşkın", "hayret", "sürpriz",
                "beklenmedik", "absürt", "alışılmadık",
            ],
            (ToneTag::Anger, Language::Tr) => &[
                "kızgın", "öfke", "sinir", "kızgınlık", "hiddet", "nefret", "kin", "intikam",
                "düşmanlık",
            ],
            (ToneTag::Freedom, Language::Tr) => &[
                "uçmak", "uçuyorum", "özgür", "özgürlük", "hafiflik", "yüzmek", "süzülmek",
                "serbest", "kanatlanmak",
            ],
            (ToneTag::Work, Language::Tr) => &[
                "iş", "şirket", "staj", "çalışma", "toplantı", "profesyonel", "kariyer", "başarı",
                "ofis", "patron", "mülakat", "terfi",
            ],
            (ToneTag::Fear, Language::En) => &[
                "fear", "nightmare", "scary", "terror", "horrific", "frightening", "creepy",
                "anxious", "worry", "panic", "dread",
            ],
            (ToneTag::Happiness, Language::En) => &[
                "happy", "joy", "beautiful", "amazing", "wonderful", "pleasure", "delight",
                "peaceful", "content", "love", "positive", "pleasant",
            ],
            (ToneTag::Sadness, Language::En) => &[
                "sad", "sorrow", "grief", "pain", "unhappy", "tears", "crying", "mourning",
                "depressed", "melancholic", "hopeless",
            ],
            (ToneTag::Surprise, Language::En) => &[
                "surprising", "strange", "weird", "bizarre", "astonished", "amazement",
                "surprise", "unexpected", "absurd", "unusual",
            ],
            (ToneTag::Anger, Language::En) => &[
                "angry", "anger", "furious", "rage", "hate", "hatred", "vengeance", "hostility",
            ],
            (ToneTag::Freedom, Language::En) => &[
                "fly", "flying", "free", "freedom", "lightness", "floating", "soar", "liberated",
                "wings",
            ],
            (ToneTag::Work, Language::En) => &[
                "job", "company", "internship", "working", "meeting", "professional", "career",
                "success", "office", "boss", "interview", "promotion",
            ],
            (ToneTag::Default, _) => &[],
        }
    }

    /// Visual mood descriptors used in illustration prompts.
    pub fn descriptor(self) -> &'static str {
        match self {
            ToneTag::Fear => {
                "dark, ominous, haunting, mysterious, foreboding, intense, dream-like, symbolic, surreal, eerie, cinematic"
            }
            ToneTag::Happiness => {
                "vibrant, joyful, uplifting, bright, golden, hopeful, inspiring, harmonious, radiant, dreamlike, warm"
            }
            ToneTag::Sadness => {
                "somber, melancholic, bittersweet, contemplative, introspective, wistful, rain-soaked, moody, dreamlike, muted colors"
            }
            ToneTag::Surprise => {
                "surreal, bizarre, unexpected, unbelievable, strange, curious, dreamlike, abstract, mind-bending, otherworldly"
            }
            ToneTag::Anger => {
                "intense, dramatic, powerful, turbulent, fiery, confrontational, chaotic, dream-like, symbolic, red-tones"
            }
            ToneTag::Freedom => {
                "soaring, boundless, expansive, liberating, weightless, ethereal, floating, dreamy, expansive, sky-bound"
            }
            ToneTag::Work => {
                "professional, accomplished, successful, sleek, corporate, formal, achievement, business environment, modern, clean"
            }
            ToneTag::Default => {
                "dreamlike, ethereal, mystical, imaginative, surreal, symbolic, metaphorical, cinematic"
            }
        }
    }
}

/// Recurring dream theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeTag {
    WorkSuccess,
    Relationship,
    Fear,
    Flying,
    Falling,
    Searching,
    Test,
    Water,
    Home,
    Default,
}

impl ThemeTag {
    fn keywords(self, language: Language) -> &'static [&'static str] {
        match (self, language) {
            (ThemeTag::WorkSuccess, Language::Tr) => &[
                "iş", "şirket", "işe alın", "staj", "toplantı", "sunum", "terfi", "başarı",
                "kariyer", "proje", "patron", "çalışma", "ofis", "mülakat", "görüşme",
            ],
            (ThemeTag::Relationship, Language::Tr) => &[
                "aşk", "sevgili", "evlilik", "romantik", "partner", "ilişki", "eş", "flört",
                "duygusal", "ayrılık", "barışma",
            ],
            (ThemeTag::Fear, Language::Tr) => &[
                "kabus", "korku", "dehşet", "ürperti", "karanlık", "canavar", "takip", "kaçış",
                "saklanma", "panik", "ölüm", "yaralanma",
            ],
            (ThemeTag::Flying, Language::Tr) => &[
                "uçmak", "uçuyorum", "kanat", "gökyüzü", "bulut", "yüksek", "süzülme", "havada",
                "kuş gibi", "özgürlük", "yükselmek",
            ],
            (ThemeTag::Falling, Language::Tr) => &[
                "düşmek", "düşüyorum", "yüksekten", "boşluk", "uçurum", "derin", "yukarıdan",
            ],
            (ThemeTag::Searching, Language::Tr) => &[
                "aramak", "kayıp", "bulamama", "kaybetmek", "bulmaya çalışmak", "çaresiz",
                "arayış", "peşinde",
            ],
            (ThemeTag::Test, Language::Tr) => &[
                "sınav", "okul", "hazırlıksız", "test", "başarı", "başarısızlık", "not", "ödev",
                "geç kalmak", "öğretmen", "okumak",
            ],
            (ThemeTag::Water, Language::Tr) => &[
                "su", "deniz", "okyanus", "yüzmek", "boğulmak", "dalga", "sel", "nehir", "göl",
                "ıslak", "yağmur",
            ],
            (ThemeTag::Home, Language::Tr) => &[
                "ev", "bina", "oda", "çatı", "bahçe", "apartman", "konut", "taşınmak", "eski ev",
                "yeni ev",
            ],
            (ThemeTag::WorkSuccess, Language::En) => &[
                "job", "company", "hired", "internship", "meeting", "presentation", "promotion",
                "success", "career", "project", "boss", "work", "office", "interview",
            ],
            (ThemeTag::Relationship, Language::En) => &[
                "love", "romantic", "marriage", "partner", "relationship", "spouse", "dating",
                "emotional", "breakup", "reconciliation",
            ],
            (ThemeTag::Fear, Language::En) => &[
                "nightmare", "fear", "terror", "creepy", "dark", "monster", "chase", "escape",
                "hiding", "panic", "death", "injury",
            ],
            (ThemeTag::Flying, Language::En) => &[
                "fly", "flying", "wings", "sky", "cloud", "high", "soaring", "air", "bird-like",
                "freedom", "rising",
            ],
            (ThemeTag::Falling, Language::En) => &[
                "fall", "falling", "height", "void", "cliff", "deep", "above",
            ],
            (ThemeTag::Searching, Language::En) => &[
                "search", "lost", "finding", "lose", "trying to find", "desperate", "quest",
                "pursuing",
            ],
            (ThemeTag::Test, Language::En) => &[
                "exam", "school", "unprepared", "test", "success", "failure", "grade",
                "homework", "late", "teacher", "study",
            ],
            (ThemeTag::Water, Language::En) => &[
                "water", "sea", "ocean", "swim", "drowning", "wave", "flood", "river", "lake",
                "wet", "rain",
            ],
            (ThemeTag::Home, Language::En) => &[
                "home", "building", "room", "roof", "garden", "apartment", "residence", "moving",
                "old house", "new house",
            ],
            (ThemeTag::Default, _) => &[],
        }
    }

    /// Scene descriptors used in illustration prompts.
    pub fn descriptor(self) -> &'static str {
        match self {
            ThemeTag::WorkSuccess => {
                "professional achievement, corporate success, workplace accomplishment, career milestone"
            }
            ThemeTag::Relationship => {
                "romantic relationship, emotional connection, love story, partnership"
            }
            ThemeTag::Fear => {
                "nightmare scenario, fear inducing situation, horror elements, threatening atmosphere"
            }
            ThemeTag::Flying => {
                "flight experience, soaring through skies, aerial freedom, unbound by gravity"
            }
            ThemeTag::Falling => {
                "falling sensation, descent through space, weightlessness, vertigo experience"
            }
            ThemeTag::Searching => {
                "search mission, quest for something lost, seeking important object or person, journey"
            }
            ThemeTag::Test => {
                "test preparation, academic pressure, performance anxiety, classroom scenario"
            }
            ThemeTag::Water => {
                "aquatic environment, underwater scene, ocean depths, flowing water elements"
            }
            ThemeTag::Home => {
                "domestic setting, familiar home environment, architectural spaces, rooms and buildings"
            }
            ThemeTag::Default => {
                "symbolic dream scenario, subconscious imagery, metaphorical representation"
            }
        }
    }
}

fn score(lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

/// Returns the first category with the strictly highest positive score.
fn pick<T: Copy>(
    lower: &str,
    categories: impl Iterator<Item = (T, &'static [&'static str])>,
) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (tag, keywords) in categories {
        let points = score(lower, keywords);
        if points == 0 {
            continue;
        }
        match best {
            Some((_, top)) if top >= points => {}
            _ => best = Some((tag, points)),
        }
    }
    best.map(|(tag, _)| tag)
}

/// Classifies the emotional tone of `text`.
pub fn classify_tone(text: &str, language: Language) -> ToneTag {
    let lower = lowercase(text);
    let categories = ToneTag::iter()
        .filter(|tag| *tag != ToneTag::Default)
        .map(|tag| (tag, tag.keywords(language)));
    pick(&lower, categories).unwrap_or(ToneTag::Default)
}

/// Classifies the dominant theme of `text`.
pub fn classify_theme(text: &str, language: Language) -> ThemeTag {
    let lower = lowercase(text);
    let categories = ThemeTag::iter()
        .filter(|tag| *tag != ThemeTag::Default)
        .map(|tag| (tag, tag.keywords(language)));
    pick(&lower, categories).unwrap_or(ThemeTag::Default)
}
