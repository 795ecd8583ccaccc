//! Merge engine - applies field mappings to every entry

use serde_json::Value;

use super::index::{AssetIndex, LookupIndex};
use super::stats::{MappingOutcome, StatisticsAggregator};
use super::types::{FieldMapping, MergeResult, Record};

/// Merge engine for replacing entry fields with asset values
pub struct MergeEngine;

impl MergeEngine {
    /// Transform every entry with the full mapping list
    ///
    /// The output has exactly one record per entry, in entry order. Inputs
    /// are never modified.
    pub fn merge(entries: &[Record], assets: &[Record], mappings: &[FieldMapping]) -> MergeResult {
        log::debug!(
            "Merging {} entries against {} assets with {} mappings",
            entries.len(),
            assets.len(),
            mappings.len()
        );

        let index = AssetIndex::build(assets, mappings);
        let mut stats = StatisticsAggregator::new(entries.len(), mappings.len());

        let merged_records: Vec<Record> = entries
            .iter()
            .map(|entry| Self::transform_entry(entry, mappings, &index, &mut stats))
            .collect();

        log::debug!(
            "Merge finished: {} matched, {} unmatched",
            stats.matched(),
            stats.unmatched()
        );

        MergeResult {
            merged_records,
            statistics: stats.finish(),
        }
    }

    /// Apply all mappings, in order, to a single entry
    ///
    /// Source values are always read from `entry` itself, so a mapping never
    /// sees values written by an earlier mapping. Writes and removals
    /// accumulate in the returned copy.
    pub fn transform_entry(
        entry: &Record,
        mappings: &[FieldMapping],
        index: &AssetIndex<'_>,
        stats: &mut StatisticsAggregator,
    ) -> Record {
        let mut transformed = entry.clone();

        for mapping in mappings {
            let outcome = Self::apply_mapping(entry, mapping, index, &mut transformed);
            stats.record(&mapping.source_field, outcome);
        }

        transformed
    }

    /// Apply one mapping, writing into `transformed`
    ///
    /// A match key without an index behaves like an empty index: every
    /// lookup misses but arrays and removal are handled as usual.
    fn apply_mapping(
        entry: &Record,
        mapping: &FieldMapping,
        index: &AssetIndex<'_>,
        transformed: &mut Record,
    ) -> MappingOutcome {
        let lookup = index.get(&mapping.match_key);
        let replace_with_key = mapping.replace_with_key.as_str();

        // Nothing to remove when the field is missing
        let Some(source_value) = entry.get(&mapping.source_field) else {
            transformed.insert(mapping.target_field.clone(), Value::Null);
            return MappingOutcome::unmatched();
        };

        let (replacement, outcome) = match source_value {
            Value::Array(items) => Self::replace_each(lookup, items, replace_with_key),
            scalar => match Self::replacement(lookup, scalar, replace_with_key) {
                Some(value) => (value, MappingOutcome::matched()),
                None => (Value::Null, MappingOutcome::unmatched()),
            },
        };
        transformed.insert(mapping.target_field.clone(), replacement);

        // Also drops the value just written when target == source
        if mapping.remove_original {
            transformed.shift_remove(&mapping.source_field);
        }

        outcome
    }

    /// Look up every array element independently
    ///
    /// Unmatched elements become `null` so positions line up with the input.
    fn replace_each(
        lookup: Option<&LookupIndex<'_>>,
        items: &[Value],
        replace_with_key: &str,
    ) -> (Value, MappingOutcome) {
        let mut outcome = MappingOutcome::default();
        let replaced = items
            .iter()
            .map(|item| {
                let replacement = Self::replacement(lookup, item, replace_with_key);
                outcome.tally(replacement.is_some());
                replacement.unwrap_or(Value::Null)
            })
            .collect();

        (Value::Array(replaced), outcome)
    }

    fn replacement(
        lookup: Option<&LookupIndex<'_>>,
        value: &Value,
        replace_with_key: &str,
    ) -> Option<Value> {
        lookup.and_then(|lookup| lookup.replacement(value, replace_with_key))
    }
}
