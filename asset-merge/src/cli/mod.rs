//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use asset_merge::Config;

/// Replace fields in a JSON entries file with values from a JSON assets file
#[derive(Debug, Parser)]
#[command(name = "asset-merge", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.config/asset-merge/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the fields available in the input files
    Fields(FieldsCommand),
    /// Create default mappings for selected fields
    Init(InitCommand),
    /// Run the merge
    Merge(MergeCommand),
}

/// Input files
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Entries JSON file (array of records to transform)
    #[arg(short, long)]
    pub entries: PathBuf,

    /// Assets JSON file (array of records to look values up in)
    #[arg(short, long)]
    pub assets: PathBuf,
}

/// Mapping options shared by `init` and `merge`
#[derive(Debug, Args)]
pub struct MappingArgs {
    /// Entry field to transform (repeatable)
    #[arg(short, long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Transform every field found in the entries
    #[arg(long, conflicts_with = "fields")]
    pub all_fields: bool,

    /// Asset field to match on (applied to every mapping)
    #[arg(long)]
    pub match_key: Option<String>,

    /// Asset field to take the replacement from (applied to every mapping)
    #[arg(long)]
    pub replace_with: Option<String>,

    /// Remove the original field after replacement
    #[arg(long)]
    pub remove_original: bool,
}

#[derive(Debug, Args)]
pub struct FieldsCommand {
    /// Entries JSON file
    #[arg(short, long)]
    pub entries: PathBuf,

    /// Assets JSON file, to also list its keys
    #[arg(short, long)]
    pub assets: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Mapping file to write; existing mappings in it are kept
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Mapping file created by `init`
    #[arg(short, long, conflicts_with_all = ["fields", "all_fields"])]
    pub mappings: Option<PathBuf>,

    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Output file (stdout when omitted)
    #[arg(short, long, conflicts_with = "download")]
    pub output: Option<PathBuf>,

    /// Write to the configured output file in the current directory
    #[arg(short, long)]
    pub download: bool,

    /// Include statistics in the written JSON
    #[arg(long)]
    pub with_stats: bool,

    /// Do not print the summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Fields(args) => commands::fields::handle_fields_command(args),
        Commands::Init(args) => commands::init::handle_init_command(args, &config),
        Commands::Merge(args) => commands::merge::handle_merge_command(args, &config),
    }
}
