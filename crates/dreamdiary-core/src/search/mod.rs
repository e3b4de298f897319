//! Journal search.
//!
//! Free-text search matches case-insensitively against the title, content,
//! tags and (when present) the analysis themes, interpretation and recurring
//! elements. Tag search is exact.

use crate::dream::Dream;
use crate::text::lowercase;
use std::collections::BTreeSet;

/// True when `dream` matches the free-text `query`.
///
/// An empty query matches nothing.
pub fn matches_query(dream: &Dream, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let needle = lowercase(query);
    let hit = |text: &str| lowercase(text).contains(&needle);

    if hit(&dream.title) || hit(&dream.content) || dream.tags.iter().any(|t| hit(t)) {
        return true;
    }

    match &dream.analysis {
        Some(analysis) => {
            analysis.themes.iter().any(|t| hit(t))
                || hit(&analysis.interpretation)
                || analysis.recurring_elements.iter().any(|e| hit(e))
        }
        None => false,
    }
}

/// Dreams matching `query`, in input order.
pub fn search_dreams<'a>(dreams: &'a [Dream], query: &str) -> Vec<&'a Dream> {
    if query.is_empty() {
        return Vec::new();
    }
    dreams.iter().filter(|d| matches_query(d, query)).collect()
}

/// Dreams carrying exactly `tag`.
pub fn filter_by_tag<'a>(dreams: &'a [Dream], tag: &str) -> Vec<&'a Dream> {
    dreams
        .iter()
        .filter(|d| d.tags.iter().any(|t| t == tag))
        .collect()
}

/// Every tag in use, sorted and deduplicated.
pub fn collect_tags(dreams: &[Dream]) -> Vec<String> {
    dreams
        .iter()
        .flat_map(|d| d.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
