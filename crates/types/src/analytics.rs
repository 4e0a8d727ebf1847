//! Derived analytics snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::record::{default_schema_version, Experience};

/// Aggregate statistics derived from the feedback log
///
/// The snapshot is recomputable from the log at any time; it is mutated only
/// by the aggregator, immediately after a record is durably appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Count of records ever accepted; stays equal to the log length
    pub total_submissions: u64,
    /// Mean of all present resilience scores, rounded half away from zero;
    /// 0 when no scored records exist
    pub average_score: i64,
    /// Per-rating submission counts, keys created lazily
    pub experience_counts: HashMap<Experience, u64>,
    /// First 50 distinct qualifying tokens ever seen in improvement text,
    /// in first-seen order. Membership only; frequency is not tracked.
    pub top_improvement_words: Vec<String>,
    /// Timestamp of the most recent successful aggregation
    pub last_updated: DateTime<Utc>,
}

impl AnalyticsSnapshot {
    /// Zeroed snapshot used when no document exists yet
    pub fn empty() -> Self {
        Self {
            schema_version: default_schema_version(),
            total_submissions: 0,
            average_score: 0,
            experience_counts: HashMap::new(),
            top_improvement_words: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Count for a single experience rating, 0 when never seen
    pub fn count_for(&self, experience: Experience) -> u64 {
        self.experience_counts.get(&experience).copied().unwrap_or(0)
    }
}

impl Default for AnalyticsSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
