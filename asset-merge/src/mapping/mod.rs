//! Building mapping lists from user choices
//!
//! Field discovery, the default-mapping heuristic and mapping files. None of
//! this is used by the merge engine itself.

mod defaults;
mod file;

pub use defaults::*;
pub use file::*;

use std::collections::BTreeSet;

use crate::merge::{FieldMapping, Record};

/// All top-level field names across `records`, sorted and deduplicated
pub fn available_fields(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Set the same match and replace-with keys on every mapping
pub fn apply_global_keys(mappings: &mut [FieldMapping], match_key: &str, replace_with_key: &str) {
    for mapping in mappings.iter_mut() {
        mapping.match_key = match_key.to_string();
        mapping.replace_with_key = replace_with_key.to_string();
    }
}

/// One-line preview of what a mapping does
pub fn describe(mapping: &FieldMapping) -> String {
    format!(
        "{} → {} (match entry.{} with asset.{}, replace with asset.{}{})",
        mapping.source_field,
        mapping.target_field,
        mapping.source_field,
        mapping.match_key,
        mapping.replace_with_key,
        if mapping.remove_original {
            ", remove original"
        } else {
            ""
        }
    )
}
