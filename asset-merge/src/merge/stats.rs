//! Statistics accumulation across entries and mappings

use std::collections::HashMap;

use super::types::{FieldStats, MergeStatistics};

/// Lookup outcome of applying one mapping to one entry
///
/// Scalar fields produce exactly one matched or unmatched count; array
/// fields produce one count per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingOutcome {
    pub matched: usize,
    pub unmatched: usize,
}

impl MappingOutcome {
    /// A single successful lookup
    pub fn matched() -> Self {
        MappingOutcome {
            matched: 1,
            unmatched: 0,
        }
    }

    /// A single failed lookup
    pub fn unmatched() -> Self {
        MappingOutcome {
            matched: 0,
            unmatched: 1,
        }
    }

    /// Count one more lookup
    pub fn tally(&mut self, found: bool) {
        if found {
            self.matched += 1;
        } else {
            self.unmatched += 1;
        }
    }
}

/// Running totals for a merge
///
/// Field buckets are kept in the order their source field is first seen.
#[derive(Debug, Default)]
pub struct StatisticsAggregator {
    total_entries: usize,
    total_mapping_applications: usize,
    matched: usize,
    unmatched: usize,
    fields: Vec<FieldStats>,
    positions: HashMap<String, usize>,
}

impl StatisticsAggregator {
    /// Create an aggregator for `entry_count` entries and `mapping_count` mappings
    pub fn new(entry_count: usize, mapping_count: usize) -> Self {
        StatisticsAggregator {
            total_entries: entry_count,
            total_mapping_applications: entry_count.saturating_mul(mapping_count),
            ..Default::default()
        }
    }

    /// Add the outcome of one (entry, mapping) pair
    pub fn record(&mut self, source_field: &str, outcome: MappingOutcome) {
        self.matched += outcome.matched;
        self.unmatched += outcome.unmatched;

        let position = match self.positions.get(source_field) {
            Some(&position) => position,
            None => {
                self.fields.push(FieldStats::new(source_field));
                let position = self.fields.len() - 1;
                self.positions.insert(source_field.to_string(), position);
                position
            }
        };

        if let Some(bucket) = self.fields.get_mut(position) {
            bucket.matched += outcome.matched;
            bucket.unmatched += outcome.unmatched;
        }
    }

    /// Matched lookups so far
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Unmatched lookups so far
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// Produce the final statistics
    pub fn finish(self) -> MergeStatistics {
        MergeStatistics {
            total_entries: self.total_entries,
            total_mapping_applications: self.total_mapping_applications,
            matched_count: self.matched,
            unmatched_count: self.unmatched,
            field_stats: self.fields,
        }
    }
}
