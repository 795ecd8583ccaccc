//! Lookup indexes over the asset collection
//!
//! One [`LookupIndex`] is built per distinct match key used by the mapping
//! list, so assets are scanned once per key rather than once per entry.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::types::{FieldMapping, LookupKey, Record};

/// Lookup table for a single match key: key value -> first asset holding it
#[derive(Debug)]
pub struct LookupIndex<'a> {
    match_key: String,
    table: HashMap<LookupKey, &'a Record>,
    /// Assets whose key collided with an earlier asset
    shadowed: usize,
}

impl<'a> LookupIndex<'a> {
    /// Index `assets` by their `match_key` field
    ///
    /// Assets without the field are skipped; `null` and empty strings are
    /// indexed like any other value. When two assets register the same key
    /// the first one wins.
    pub fn build(match_key: &str, assets: &'a [Record]) -> Self {
        let mut table: HashMap<LookupKey, &'a Record> = HashMap::new();
        let mut shadowed = 0usize;

        for asset in assets {
            let Some(value) = asset.get(match_key) else {
                continue;
            };

            let mut collided = false;
            for key in LookupKey::forms(value) {
                match table.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(asset);
                    }
                    Entry::Occupied(_) => collided = true,
                }
            }
            if collided {
                shadowed += 1;
            }
        }

        if shadowed > 0 {
            log::warn!(
                "Match key '{}': {} assets repeat an earlier value (first match wins)",
                match_key,
                shadowed
            );
        }

        log::debug!(
            "Match key '{}': indexed {} lookup keys from {} assets",
            match_key,
            table.len(),
            assets.len()
        );

        LookupIndex {
            match_key: match_key.to_string(),
            table,
            shadowed,
        }
    }

    /// Find the asset matching an entry value (raw form only)
    pub fn get(&self, value: &Value) -> Option<&'a Record> {
        self.table.get(&LookupKey::raw(value)).copied()
    }

    /// Find the replacement value for an entry value
    ///
    /// Returns `None` when no asset matches or the matched asset has no
    /// `replace_with_key` field. A present `null` counts as a replacement.
    pub fn replacement(&self, value: &Value, replace_with_key: &str) -> Option<Value> {
        self.get(value)
            .and_then(|asset| asset.get(replace_with_key))
            .cloned()
    }

    /// The asset field this index is keyed by
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    /// Number of registered lookup keys (all forms)
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when no asset defines the match key
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of assets that lost to an earlier asset on at least one key
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }
}

/// All lookup indexes needed by a mapping list, keyed by match key
#[derive(Debug, Default)]
pub struct AssetIndex<'a> {
    indexes: HashMap<String, LookupIndex<'a>>,
}

impl<'a> AssetIndex<'a> {
    /// Build one index per distinct match key in `mappings`
    ///
    /// A match key that no asset defines still gets an (empty) index, so
    /// every lookup through it misses.
    pub fn build(assets: &'a [Record], mappings: &[FieldMapping]) -> Self {
        let mut indexes = HashMap::new();
        let mut seen = HashSet::new();

        for mapping in mappings {
            if !seen.insert(mapping.match_key.as_str()) {
                continue;
            }

            let index = LookupIndex::build(&mapping.match_key, assets);
            if index.is_empty() {
                log::warn!(
                    "No asset defines match key '{}' - mappings using it will not match",
                    mapping.match_key
                );
            }
            indexes.insert(mapping.match_key.clone(), index);
        }

        AssetIndex { indexes }
    }

    /// Index for a match key, if a mapping uses it
    pub fn get(&self, match_key: &str) -> Option<&LookupIndex<'a>> {
        self.indexes.get(match_key)
    }

    /// Number of indexes built
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// True when no index was built
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_asset_matches_string_entry() {
        let assets = records(json!([{"id": 5, "name": "x"}]));
        let index = LookupIndex::build("id", &assets);

        assert_eq!(index.replacement(&json!(5), "name"), Some(json!("x")));
        assert_eq!(index.replacement(&json!("5"), "name"), Some(json!("x")));
        assert_eq!(index.replacement(&json!(5.0), "name"), Some(json!("x")));
    }

    #[test]
    fn test_numeric_string_asset_matches_number_entry() {
        let assets = records(json!([{"id": "7", "name": "y"}]));
        let index = LookupIndex::build("id", &assets);

        assert_eq!(index.replacement(&json!(7), "name"), Some(json!("y")));
        assert_eq!(index.replacement(&json!("7"), "name"), Some(json!("y")));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_bool_asset_matches_string_entry() {
        let assets = records(json!([{"flag": true, "name": "on"}]));
        let index = LookupIndex::build("flag", &assets);

        assert_eq!(index.replacement(&json!(true), "name"), Some(json!("on")));
        assert_eq!(index.replacement(&json!("true"), "name"), Some(json!("on")));
        assert_eq!(index.replacement(&json!(1), "name"), None);
    }

    #[test]
    fn test_first_asset_wins() {
        let assets = records(json!([
            {"id": 1, "name": "first"},
            {"id": "1", "name": "second"},
            {"id": 1, "name": "third"}
        ]));
        let index = LookupIndex::build("id", &assets);

        assert_eq!(index.replacement(&json!(1), "name"), Some(json!("first")));
        assert_eq!(index.replacement(&json!("1"), "name"), Some(json!("first")));
        assert_eq!(index.shadowed(), 2);
    }

    #[test]
    fn test_null_and_empty_string_are_indexed() {
        let assets = records(json!([
            {"id": null, "name": "nothing"},
            {"id": "", "name": "blank"},
            {"name": "no key"}
        ]));
        let index = LookupIndex::build("id", &assets);

        assert_eq!(index.replacement(&Value::Null, "name"), Some(json!("nothing")));
        assert_eq!(index.replacement(&json!(""), "name"), Some(json!("blank")));
        // empty string is not numeric, so 0 has no match
        assert_eq!(index.replacement(&json!(0), "name"), None);
    }

    #[test]
    fn test_missing_replace_key_is_no_replacement() {
        let assets = records(json!([{"id": 1}, {"id": 2, "filename": null}]));
        let index = LookupIndex::build("id", &assets);

        assert!(index.get(&json!(1)).is_some());
        assert_eq!(index.replacement(&json!(1), "filename"), None);
        assert_eq!(index.replacement(&json!(2), "filename"), Some(Value::Null));
    }

    #[test]
    fn test_object_keys_match_structurally() {
        let assets = records(json!([{"key": {"a": 1}, "name": "obj"}]));
        let index = LookupIndex::build("key", &assets);

        assert_eq!(index.replacement(&json!({"a": 1}), "name"), Some(json!("obj")));
        assert_eq!(index.replacement(&json!("{\"a\":1}"), "name"), Some(json!("obj")));
    }

    #[test]
    fn test_asset_index_builds_once_per_match_key() {
        let assets = records(json!([{"id": 1, "code": "A", "filename": "a.png"}]));
        let mappings = vec![
            FieldMapping::new("imageId", "image", "id", "filename"),
            FieldMapping::new("thumbId", "thumb", "id", "filename"),
            FieldMapping::new("codeRef", "code", "code", "filename"),
        ];

        let index = AssetIndex::build(&assets, &mappings);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("id").map(|i| i.match_key()), Some("id"));
        assert!(index.get("code").is_some());
    }

    #[test]
    fn test_asset_index_keeps_undefined_match_key_empty() {
        let assets = records(json!([{"id": 1}]));
        let mappings = vec![FieldMapping::new("ref", "ref", "uuid", "filename")];

        let index = AssetIndex::build(&assets, &mappings);
        let lookup = index.get("uuid").unwrap();
        assert!(lookup.is_empty());
        assert_eq!(lookup.replacement(&json!(1), "filename"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_asset_index_empty_assets() {
        let mappings = vec![FieldMapping::new("ref", "ref", "id", "filename")];
        let index = AssetIndex::build(&[], &mappings);
        assert!(index.get("id").is_some_and(|lookup| lookup.is_empty()));
        assert!(index.get("uuid").is_none());
    }
}
