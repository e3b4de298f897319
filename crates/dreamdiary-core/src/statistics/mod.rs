//! Aggregate statistics over the journal.

mod compute;
mod model;

pub use compute::compute_statistics;
pub use model::{DreamStatistics, TimeRange};
