//! Loading entry and asset collections
//!
//! The merge engine assumes both inputs are arrays of JSON objects; this is
//! where that is checked.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::merge::Record;

/// Error loading a record collection
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File does not have a `.json` extension
    UnsupportedExtension { path: PathBuf },
    /// Contents are not valid JSON
    InvalidJson { source_name: String, message: String },
    /// Top-level value is not an array
    NotAnArray { source_name: String },
    /// An array element is not an object
    NotARecord { source_name: String, index: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            LoadError::UnsupportedExtension { path } => {
                write!(f, "Please upload only JSON files: '{}'", path.display())
            }
            LoadError::InvalidJson {
                source_name,
                message,
            } => {
                write!(f, "Invalid JSON format in '{}': {}", source_name, message)
            }
            LoadError::NotAnArray { source_name } => {
                write!(f, "'{}' must contain a valid JSON array", source_name)
            }
            LoadError::NotARecord { source_name, index } => {
                write!(
                    f,
                    "'{}' element {} is not an object - every element must be a record",
                    source_name, index
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse JSON text into a collection of records
///
/// `source_name` only appears in error messages.
pub fn parse_records(text: &str, source_name: &str) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(|e| LoadError::InvalidJson {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            source_name: source_name.to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(LoadError::NotARecord {
                source_name: source_name.to_string(),
                index,
            }),
        })
        .collect()
}

/// Read and parse a `.json` file of records
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let records = parse_records(&text, &source_name)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the entries and assets files
pub fn load_inputs(
    entries_path: &Path,
    assets_path: &Path,
) -> Result<(Vec<Record>, Vec<Record>), LoadError> {
    let entries = load_records(entries_path)?;
    let assets = load_records(assets_path)?;
    Ok((entries, assets))
}
