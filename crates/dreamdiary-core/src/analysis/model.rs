//! Analysis domain model.

use serde::{Deserialize, Serialize};

/// Structured interpretation of a dream.
///
/// Field names use camelCase on the wire because that is the JSON shape the
/// analysis prompt asks the model to produce. All five fields are required
/// when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamAnalysis {
    pub themes: Vec<String>,
    pub interpretation: String,
    pub emotional_tone: String,
    pub recurring_elements: Vec<String>,
    pub psychological_perspective: String,
}

impl DreamAnalysis {
    /// Applies `f` to every text field, element by element for the lists.
    pub fn map_text(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            themes: self.themes.iter().map(|t| f(t)).collect(),
            interpretation: f(&self.interpretation),
            emotional_tone: f(&self.emotional_tone),
            recurring_elements: self.recurring_elements.iter().map(|e| f(e)).collect(),
            psychological_perspective: f(&self.psychological_perspective),
        }
    }

    /// Iterates over every piece of text in the analysis.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        [
            self.interpretation.as_str(),
            self.emotional_tone.as_str(),
            self.psychological_perspective.as_str(),
        ]
        .into_iter()
        .chain(self.themes.iter().map(String::as_str))
        .chain(self.recurring_elements.iter().map(String::as_str))
    }
}
