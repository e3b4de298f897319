//! Search Service

use anyhow::{Context, Result};
use dreamdiary_core::dream::{Dream, DreamRepository};
use dreamdiary_core::search::{collect_tags, filter_by_tag, search_dreams};
use std::sync::Arc;

/// Free-text and tag search over the journal. Results are newest first.
pub struct SearchService {
    dreams: Arc<dyn DreamRepository>,
}

impl SearchService {
    pub fn new(dreams: Arc<dyn DreamRepository>) -> Self {
        Self { dreams }
    }

    async fn journal(&self) -> Result<Vec<Dream>> {
        let mut dreams = self
            .dreams
            .list_all()
            .await
            .context("Failed to load dreams for search")?;
        dreams.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(dreams)
    }

    /// Case-insensitive search; an empty query returns nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<Dream>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let dreams = self.journal().await?;
        Ok(search_dreams(&dreams, query).into_iter().cloned().collect())
    }

    pub async fn search_by_tag(&self, tag: &str) -> Result<Vec<Dream>> {
        let dreams = self.journal().await?;
        Ok(filter_by_tag(&dreams, tag).into_iter().cloned().collect())
    }

    /// Every tag in use, sorted and deduplicated.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        Ok(collect_tags(&self.journal().await?))
    }
}
