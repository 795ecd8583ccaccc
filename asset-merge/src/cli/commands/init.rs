//! `init` command - generate default mappings for selected fields

use anyhow::{Context, Result};
use colored::*;

use asset_merge::mapping::{self, available_fields};
use asset_merge::{Config, load_inputs};

use super::mappings_from_args;
use crate::cli::InitCommand;

pub fn handle_init_command(args: InitCommand, config: &Config) -> Result<()> {
    if args.mapping.fields.is_empty() && !args.mapping.all_fields {
        anyhow::bail!("Select fields with --field or --all-fields (see the 'fields' command)");
    }

    let (entries, assets) = load_inputs(&args.inputs.entries, &args.inputs.assets)
        .context("Failed to load input files")?;

    let entry_fields = available_fields(&entries);
    for field in &args.mapping.fields {
        if !entry_fields.contains(field) {
            log::warn!("Field '{}' does not appear in any entry", field);
        }
    }

    let existing = match &args.output {
        Some(path) if path.exists() => mapping::load_mappings(path)
            .with_context(|| format!("Failed to read existing mappings: {}", path.display()))?,
        _ => Vec::new(),
    };

    let mappings = mappings_from_args(&args.mapping, config, &entries, &existing);

    let asset_keys = available_fields(&assets);
    for m in &mappings {
        for key in [&m.match_key, &m.replace_with_key] {
            if !asset_keys.contains(key) {
                log::warn!("Asset key '{}' does not appear in any asset", key);
            }
        }
    }

    match &args.output {
        Some(path) => {
            mapping::save_mappings(path, &mappings)
                .with_context(|| format!("Failed to write mappings: {}", path.display()))?;
            for m in &mappings {
                println!("  {}", mapping::describe(m));
            }
            println!(
                "Saved {} mappings to: {}",
                mappings.len(),
                path.display().to_string().bright_green()
            );
        }
        None => {
            let json =
                serde_json::to_string_pretty(&mappings).context("Failed to format mappings")?;
            println!("{}", json);
        }
    }

    Ok(())
}
