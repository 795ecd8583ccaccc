//! Command handlers

pub mod fields;
pub mod init;
pub mod merge;

use asset_merge::mapping::{self, MappingDefaults};
use asset_merge::{Config, FieldMapping, Record};

use super::MappingArgs;

/// Mapping defaults from config, overridden by command-line flags
fn mapping_defaults(args: &MappingArgs, config: &Config) -> MappingDefaults {
    let mut defaults = config.mapping_defaults();
    if let Some(match_key) = &args.match_key {
        defaults.match_key = match_key.clone();
    }
    if let Some(replace_with) = &args.replace_with {
        defaults.replace_with_key = replace_with.clone();
    }
    defaults
}

/// Fields named with `--field`, or every entry field under `--all-fields`
fn selected_fields(args: &MappingArgs, entries: &[Record]) -> Vec<String> {
    if args.all_fields {
        mapping::available_fields(entries)
    } else {
        args.fields.clone()
    }
}

/// Build mappings for the selected fields, keeping `existing` ones
///
/// Explicit `--match-key`/`--replace-with`/`--remove-original` flags apply
/// to every resulting mapping.
fn mappings_from_args(
    args: &MappingArgs,
    config: &Config,
    entries: &[Record],
    existing: &[FieldMapping],
) -> Vec<FieldMapping> {
    let defaults = mapping_defaults(args, config);
    let fields = selected_fields(args, entries);
    let mut mappings = mapping::build_mappings(&fields, existing, &defaults);
    apply_overrides(args, &mut mappings);
    mappings
}

/// Apply explicit flags on top of loaded or generated mappings
fn apply_overrides(args: &MappingArgs, mappings: &mut [FieldMapping]) {
    for m in mappings.iter_mut() {
        if let Some(match_key) = &args.match_key {
            m.match_key = match_key.clone();
        }
        if let Some(replace_with) = &args.replace_with {
            m.replace_with_key = replace_with.clone();
        }
        if args.remove_original {
            m.remove_original = true;
        }
    }
}
