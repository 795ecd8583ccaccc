//! Merge output

use serde::{Deserialize, Serialize};

use super::{MergeStatistics, Record};

/// Transformed entries together with the statistics of the run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    /// One transformed record per input entry, in input order
    #[serde(rename = "mergedData")]
    pub merged_records: Vec<Record>,
    #[serde(rename = "stats")]
    pub statistics: MergeStatistics,
}

impl MergeResult {
    /// Number of transformed records
    pub fn len(&self) -> usize {
        self.merged_records.len()
    }

    /// True when no entries were processed
    pub fn is_empty(&self) -> bool {
        self.merged_records.is_empty()
    }

    /// Consume the result, keeping only the records
    pub fn into_records(self) -> Vec<Record> {
        self.merged_records
    }
}
