//! `merge` command - run the merge and write the result

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::*;

use asset_merge::io::{
    format_file_size, render_summary, to_indented_json, write_records, write_result,
};
use asset_merge::mapping;
use asset_merge::{Config, FieldMapping, MergeResult, Record, load_inputs, merge};

use super::{apply_overrides, mappings_from_args};
use crate::cli::MergeCommand;

pub fn handle_merge_command(args: MergeCommand, config: &Config) -> Result<()> {
    let (entries, assets) = load_inputs(&args.inputs.entries, &args.inputs.assets)
        .context("Failed to load input files")?;

    let mappings = resolve_mappings(&args, config, &entries)?;
    if mappings.is_empty() {
        anyhow::bail!("No field mappings configured - use --field, --all-fields or --mappings");
    }

    log::info!(
        "Entries: {} items, assets: {} items, field mappings: {}",
        entries.len(),
        assets.len(),
        mappings.len()
    );

    let result = merge(&entries, &assets, &mappings);

    let output_path = if args.download {
        Some(PathBuf::from(&config.output_file))
    } else {
        args.output.clone()
    };

    match output_path {
        Some(path) => {
            let bytes = if args.with_stats {
                write_result(&path, &result, config.indent)
            } else {
                write_records(&path, &result.merged_records, config.indent)
            }
            .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            log::info!("Wrote merge result to {}", path.display());

            if !args.quiet {
                print_summary(&result, &mappings);
                println!();
                println!(
                    "Results saved to: {} ({})",
                    path.display().to_string().bright_green(),
                    format_file_size(bytes)
                );
            }
        }
        None => {
            let json = if args.with_stats {
                to_indented_json(&result, config.indent)
            } else {
                to_indented_json(&result.merged_records, config.indent)
            }
            .context("Failed to format merge result")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Mappings from `--mappings`, or generated from `--field`/`--all-fields`
fn resolve_mappings(
    args: &MergeCommand,
    config: &Config,
    entries: &[Record],
) -> Result<Vec<FieldMapping>> {
    match &args.mappings {
        Some(path) => {
            let mut mappings = mapping::load_mappings(path)
                .with_context(|| format!("Failed to load mappings: {}", path.display()))?;
            apply_overrides(&args.mapping, &mut mappings);
            Ok(mappings)
        }
        None => Ok(mappings_from_args(&args.mapping, config, entries, &[])),
    }
}

fn print_summary(result: &MergeResult, mappings: &[FieldMapping]) {
    println!("{}", "Field mappings".bold());
    for m in mappings {
        println!("  {}", mapping::describe(m).cyan());
    }
    println!();
    println!("{}", "Merge statistics".bold());

    let stats = &result.statistics;
    let summary = render_summary(result);
    if stats.unmatched_count > 0 {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary.green());
    }
}
