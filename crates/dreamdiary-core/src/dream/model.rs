//! Dream journal entry.

use crate::analysis::DreamAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

/// How the dreamer felt about a dream.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DreamMood {
    Positive,
    #[default]
    Neutral,
    Negative,
    Confusing,
    Scary,
    Exciting,
}

impl DreamMood {
    /// Emoji shown next to the mood.
    pub fn emoji(self) -> &'static str {
        match self {
            DreamMood::Positive => "😊",
            DreamMood::Neutral => "😐",
            DreamMood::Negative => "😔",
            DreamMood::Confusing => "😕",
            DreamMood::Scary => "😱",
            DreamMood::Exciting => "🤩",
        }
    }

    pub fn display_name(self) -> &'static str {
        self.into()
    }
}

/// A single recorded dream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub mood: DreamMood,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Prompt that produced the current illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Local path of the stored illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DreamAnalysis>,
}

impl Dream {
    /// Creates a dream dated now with a fresh id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, mood: DreamMood) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            date: Utc::now(),
            mood,
            tags: Vec::new(),
            image_prompt: None,
            generated_image_url: None,
            analysis: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}
