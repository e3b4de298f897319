//! Settings record.

use super::lucid::LucidDreamingTechnique;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// User preferences, stored as a single record.
///
/// Unknown or missing keys fall back to their defaults so that older files
/// keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub is_dark_mode_enabled: bool,
    pub notifications_enabled: bool,
    pub notification_time: NaiveTime,
    pub lucid_dreaming_enabled: bool,
    pub selected_lucid_technique: LucidDreamingTechnique,
    pub lucid_dream_reminder_time: NaiveTime,
    pub show_lucid_dream_tips: bool,
}

fn at_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_dark_mode_enabled: false,
            notifications_enabled: true,
            notification_time: at_hour(8),
            lucid_dreaming_enabled: false,
            selected_lucid_technique: LucidDreamingTechnique::Reality,
            lucid_dream_reminder_time: at_hour(22),
            show_lucid_dream_tips: true,
        }
    }
}

impl Settings {
    /// A random tip for the selected technique, when lucid dreaming is on.
    pub fn lucid_tip<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        use rand::seq::SliceRandom;

        if !self.lucid_dreaming_enabled || !self.show_lucid_dream_tips {
            return None;
        }
        self.selected_lucid_technique.tips().choose(rng).copied()
    }
}
