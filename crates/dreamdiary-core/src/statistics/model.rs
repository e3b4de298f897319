//! Statistics models.

use crate::dream::DreamMood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Window of dreams a statistics view covers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    ThreeMonths,
    SixMonths,
    Year,
    AllTime,
}

impl TimeRange {
    /// Length of the window in days; `None` for [`TimeRange::AllTime`].
    pub fn days(self) -> Option<i64> {
        match self {
            TimeRange::Week => Some(7),
            TimeRange::Month => Some(30),
            TimeRange::ThreeMonths => Some(90),
            TimeRange::SixMonths => Some(180),
            TimeRange::Year => Some(365),
            TimeRange::AllTime => None,
        }
    }
}

/// Derived statistics; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DreamStatistics {
    /// Every mood, in declaration order, including zero counts
    pub mood_distribution: Vec<(DreamMood, usize)>,
    pub most_common_themes: Vec<(String, usize)>,
    /// Dreams per calendar day (UTC), oldest first
    pub dreams_over_time: Vec<(NaiveDate, usize)>,
    pub total_dreams: usize,
    pub average_dreams_per_week: f64,
    pub most_recurring_elements: Vec<(String, usize)>,
}

impl DreamStatistics {
    pub fn mood_count(&self, mood: DreamMood) -> usize {
        self.mood_distribution
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
