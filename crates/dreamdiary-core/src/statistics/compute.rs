//! Statistics computation.

use super::model::{DreamStatistics, TimeRange};
use crate::dream::{Dream, DreamMood};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;

/// Number of entries kept in the theme and element rankings.
const TOP_N: usize = 5;

/// Computes statistics for the dreams within `range` of `now`.
///
/// A dream is in range when its date is strictly after `now - days`.
pub fn compute_statistics(
    dreams: &[Dream],
    range: TimeRange,
    now: DateTime<Utc>,
) -> DreamStatistics {
    let filtered: Vec<&Dream> = match range.days() {
        Some(days) => {
            let cutoff = now - Duration::days(days);
            dreams.iter().filter(|d| d.date > cutoff).collect()
        }
        None => dreams.iter().collect(),
    };

    let mut moods: Vec<(DreamMood, usize)> = DreamMood::iter().map(|m| (m, 0)).collect();
    for dream in &filtered {
        if let Some(entry) = moods.iter_mut().find(|(m, _)| *m == dream.mood) {
            entry.1 += 1;
        }
    }

    let themes = top_counts(
        filtered
            .iter()
            .filter_map(|d| d.analysis.as_ref())
            .flat_map(|a| a.themes.iter()),
    );
    let elements = top_counts(
        filtered
            .iter()
            .filter_map(|d| d.analysis.as_ref())
            .flat_map(|a| a.recurring_elements.iter()),
    );

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for dream in &filtered {
        *per_day.entry(dream.date.date_naive()).or_insert(0) += 1;
    }

    let average = match filtered.iter().map(|d| d.date).min() {
        Some(oldest) => {
            let days = (now - oldest).num_days();
            let weeks = (days as f64 / 7.0).max(1.0);
            filtered.len() as f64 / weeks
        }
        None => 0.0,
    };

    DreamStatistics {
        mood_distribution: moods,
        most_common_themes: themes,
        dreams_over_time: per_day.into_iter().collect(),
        total_dreams: filtered.len(),
        average_dreams_per_week: average,
        most_recurring_elements: elements,
    }
}

/// Counts values, ranks by count descending then name ascending.
fn top_counts<'a>(values: impl Iterator<Item = &'a String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_N);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DreamAnalysis;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap()
    }

    fn dream(days_ago: i64, mood: DreamMood, themes: &[&str]) -> Dream {
        let mut dream = Dream::new("t", "c", mood).with_date(now() - Duration::days(days_ago));
        if !themes.is_empty() {
            dream.analysis = Some(DreamAnalysis {
                themes: themes.iter().map(|s| s.to_string()).collect(),
                recurring_elements: vec!["door".into()],
                ..Default::default()
            });
        }
        dream
    }

    #[test]
    fn test_empty_journal() {
        let stats = compute_statistics(&[], TimeRange::Month, now());
        assert_eq!(stats.total_dreams, 0);
        assert_eq!(stats.average_dreams_per_week, 0.0);
        assert_eq!(stats.mood_distribution.len(), 6);
        assert!(stats.mood_distribution.iter().all(|(_, c)| *c == 0));
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        let dreams = vec![
            dream(7, DreamMood::Scary, &[]),
            dream(6, DreamMood::Positive, &[]),
        ];
        let stats = compute_statistics(&dreams, TimeRange::Week, now());
        assert_eq!(stats.total_dreams, 1);
        assert_eq!(stats.mood_count(DreamMood::Positive), 1);
        assert_eq!(stats.mood_count(DreamMood::Scary), 0);

        let all = compute_statistics(&dreams, TimeRange::AllTime, now());
        assert_eq!(all.total_dreams, 2);
    }

    #[test]
    fn test_theme_ranking_ties_by_name() {
        let dreams = vec![
            dream(1, DreamMood::Neutral, &["water", "flight"]),
            dream(2, DreamMood::Neutral, &["water", "chase"]),
            dream(3, DreamMood::Neutral, &["beta", "alpha", "zeta", "gamma"]),
        ];
        let stats = compute_statistics(&dreams, TimeRange::Month, now());
        assert_eq!(
            stats.most_common_themes,
            vec![
                ("water".to_string(), 2),
                ("alpha".to_string(), 1),
                ("beta".to_string(), 1),
                ("chase".to_string(), 1),
                ("flight".to_string(), 1),
            ]
        );
        assert_eq!(stats.most_recurring_elements, vec![("door".to_string(), 3)]);
    }

    #[test]
    fn test_per_day_counts_ascending() {
        let dreams = vec![
            dream(0, DreamMood::Neutral, &[]),
            dream(2, DreamMood::Neutral, &[]),
            dream(0, DreamMood::Neutral, &[]),
        ];
        let stats = compute_statistics(&dreams, TimeRange::Week, now());
        let days: Vec<usize> = stats.dreams_over_time.iter().map(|(_, c)| *c).collect();
        assert_eq!(days, vec![1, 2]);
        assert!(stats.dreams_over_time[0].0 < stats.dreams_over_time[1].0);
    }

    #[test]
    fn test_weekly_average_has_one_week_floor() {
        let recent = vec![dream(1, DreamMood::Neutral, &[]), dream(2, DreamMood::Neutral, &[])];
        let stats = compute_statistics(&recent, TimeRange::AllTime, now());
        assert_eq!(stats.average_dreams_per_week, 2.0);

        let spread = vec![dream(0, DreamMood::Neutral, &[]), dream(28, DreamMood::Neutral, &[])];
        let stats = compute_statistics(&spread, TimeRange::AllTime, now());
        assert_eq!(stats.average_dreams_per_week, 0.5);
    }
}
