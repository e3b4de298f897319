//! Statistics Service

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dreamdiary_core::dream::DreamRepository;
use dreamdiary_core::statistics::{DreamStatistics, TimeRange, compute_statistics};
use std::sync::Arc;

/// Computes journal statistics over a time range.
pub struct StatisticsService {
    dreams: Arc<dyn DreamRepository>,
}

impl StatisticsService {
    pub fn new(dreams: Arc<dyn DreamRepository>) -> Self {
        Self { dreams }
    }

    /// Statistics for the dreams within `range` of `now`.
    pub async fn compute(&self, range: TimeRange, now: DateTime<Utc>) -> Result<DreamStatistics> {
        let dreams = self
            .dreams
            .list_all()
            .await
            .context("Failed to load dreams for statistics")?;
        tracing::debug!(
            "[StatisticsService] Computing {:?} statistics over {} dreams",
            range,
            dreams.len()
        );
        Ok(compute_statistics(&dreams, range, now))
    }
}
