//! Merge engine: replaces entry fields with values looked up from assets
//!
//! The engine is a pure function of its inputs. It never mutates the entry
//! or asset collections and every "failure" (missing field, no matching
//! asset) is reported as data: a `null` target value plus statistics.

mod engine;
mod index;
mod stats;
pub mod types;

pub use engine::MergeEngine;
pub use index::{AssetIndex, LookupIndex};
pub use stats::{MappingOutcome, StatisticsAggregator};
pub use types::*;

/// Apply `mappings` to every entry, looking replacement values up in `assets`
///
/// Shorthand for [`MergeEngine::merge`].
pub fn merge(entries: &[Record], assets: &[Record], mappings: &[FieldMapping]) -> MergeResult {
    MergeEngine::merge(entries, assets, mappings)
}
