//! Field mapping rules

use serde::{Deserialize, Serialize};

/// One transformation rule applied to every entry
///
/// The entry's `source_field` value is looked up against the assets'
/// `match_key` field; the matched asset's `replace_with_key` value is
/// written to `target_field`.
///
/// Serialized with camelCase names so mapping files written by other tools
/// (`sourceField`, `targetField`, ...) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Field read from the original entry
    pub source_field: String,
    /// Field written in the transformed entry (may equal `source_field`)
    pub target_field: String,
    /// Asset field used as the lookup key
    pub match_key: String,
    /// Asset field whose value becomes the replacement
    pub replace_with_key: String,
    /// Delete `source_field` from the transformed entry afterwards
    #[serde(default)]
    pub remove_original: bool,
}

impl FieldMapping {
    /// Create a mapping that keeps the original field
    pub fn new(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        match_key: impl Into<String>,
        replace_with_key: impl Into<String>,
    ) -> Self {
        FieldMapping {
            source_field: source_field.into(),
            target_field: target_field.into(),
            match_key: match_key.into(),
            replace_with_key: replace_with_key.into(),
            remove_original: false,
        }
    }

    /// Set whether the source field is removed after transformation
    pub fn with_remove_original(mut self, remove_original: bool) -> Self {
        self.remove_original = remove_original;
        self
    }

    /// True when the replacement is written back over the source field
    pub fn is_in_place(&self) -> bool {
        self.source_field == self.target_field
    }
}
