//! `fields` command - list selectable entry fields and asset keys

use anyhow::{Context, Result};
use colored::*;

use asset_merge::load_records;
use asset_merge::mapping::available_fields;

use crate::cli::FieldsCommand;

pub fn handle_fields_command(args: FieldsCommand) -> Result<()> {
    let entries = load_records(&args.entries).context("Failed to load entries")?;
    print_fields("Entry fields", entries.len(), &available_fields(&entries));

    if let Some(assets_path) = args.assets {
        let assets = load_records(&assets_path).context("Failed to load assets")?;
        println!();
        print_fields("Asset keys", assets.len(), &available_fields(&assets));
    }

    Ok(())
}

fn print_fields(title: &str, record_count: usize, fields: &[String]) {
    println!(
        "{} ({} fields in {} records)",
        title.bold(),
        fields.len(),
        record_count
    );
    if fields.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for field in fields {
        println!("  {}", field.cyan());
    }
}
