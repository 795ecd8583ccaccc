//! Default mappings for newly selected fields

use serde::{Deserialize, Serialize};

use crate::merge::FieldMapping;

/// Values used when a field is selected without an explicit mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDefaults {
    pub match_key: String,
    pub replace_with_key: String,
    /// Suffix stripped from the source field to name the target field
    pub strip_suffix: String,
}

impl Default for MappingDefaults {
    fn default() -> Self {
        MappingDefaults {
            match_key: "id".to_string(),
            replace_with_key: "filename".to_string(),
            strip_suffix: "Id".to_string(),
        }
    }
}

/// Target field name for a source field: `imageId` becomes `image`
///
/// A field named exactly like the suffix becomes the empty string.
pub fn default_target_field(source_field: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return source_field.to_string();
    }
    source_field
        .strip_suffix(suffix)
        .unwrap_or(source_field)
        .to_string()
}

/// A fresh mapping for `source_field` that keeps the original field
pub fn default_mapping(source_field: &str, defaults: &MappingDefaults) -> FieldMapping {
    FieldMapping::new(
        source_field,
        default_target_field(source_field, &defaults.strip_suffix),
        defaults.match_key.as_str(),
        defaults.replace_with_key.as_str(),
    )
}

/// One mapping per selected field, in selection order
///
/// Fields that already have a mapping in `existing` keep it unchanged.
pub fn build_mappings(
    selected: &[String],
    existing: &[FieldMapping],
    defaults: &MappingDefaults,
) -> Vec<FieldMapping> {
    selected
        .iter()
        .map(|field| {
            existing
                .iter()
                .find(|m| &m.source_field == field)
                .cloned()
                .unwrap_or_else(|| default_mapping(field, defaults))
        })
        .collect()
}
