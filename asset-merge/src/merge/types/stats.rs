//! Merge statistics

use serde::{Deserialize, Serialize};

/// Match counts for one source field, summed over all entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    pub field: String,
    pub matched: usize,
    pub unmatched: usize,
}

impl FieldStats {
    /// Create an empty bucket for a field
    pub fn new(field: impl Into<String>) -> Self {
        FieldStats {
            field: field.into(),
            matched: 0,
            unmatched: 0,
        }
    }

    /// Total lookups performed for this field
    pub fn total(&self) -> usize {
        self.matched + self.unmatched
    }
}

/// Aggregate statistics for one merge run
///
/// `field_stats` is ordered by the first occurrence of each source field in
/// the mapping list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStatistics {
    /// Number of entries processed
    pub total_entries: usize,
    /// Mappings multiplied by entries
    #[serde(rename = "totalMappings")]
    pub total_mapping_applications: usize,
    /// Successful lookups (array elements count individually)
    #[serde(rename = "matchedMappings")]
    pub matched_count: usize,
    /// Failed lookups, missing fields included
    #[serde(rename = "unmatchedMappings")]
    pub unmatched_count: usize,
    /// Per source field breakdown
    pub field_stats: Vec<FieldStats>,
}

impl MergeStatistics {
    /// Find the bucket for a source field
    pub fn field(&self, name: &str) -> Option<&FieldStats> {
        self.field_stats.iter().find(|s| s.field == name)
    }

    /// Fraction of lookups that matched, `None` if nothing was looked up
    pub fn match_rate(&self) -> Option<f64> {
        let total = self.matched_count + self.unmatched_count;
        if total == 0 {
            None
        } else {
            Some(self.matched_count as f64 / total as f64)
        }
    }
}
