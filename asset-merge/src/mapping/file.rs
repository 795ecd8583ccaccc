//! Mapping files
//!
//! A mapping file is JSON, either `{"mappings": [...]}` or a bare array of
//! mappings. Files are always written in the wrapped form.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::merge::FieldMapping;

/// Error reading or writing a mapping file
#[derive(Debug)]
pub enum MappingFileError {
    /// File could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File contents are not a valid mapping list
    Parse { path: PathBuf, message: String },
    /// Mappings could not be serialized
    Serialize { message: String },
}

impl std::fmt::Display for MappingFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingFileError::Io { path, source } => {
                write!(f, "Failed to access mapping file '{}': {}", path.display(), source)
            }
            MappingFileError::Parse { path, message } => {
                write!(f, "Invalid mapping file '{}': {}", path.display(), message)
            }
            MappingFileError::Serialize { message } => {
                write!(f, "Failed to serialize mappings: {}", message)
            }
        }
    }
}

impl std::error::Error for MappingFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MappingFileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum MappingDocument {
    Wrapped { mappings: Vec<FieldMapping> },
    Bare(Vec<FieldMapping>),
}

impl MappingDocument {
    fn into_mappings(self) -> Vec<FieldMapping> {
        match self {
            MappingDocument::Wrapped { mappings } | MappingDocument::Bare(mappings) => mappings,
        }
    }
}

/// Parse mapping file contents
pub fn parse_mappings(text: &str, path: &Path) -> Result<Vec<FieldMapping>, MappingFileError> {
    serde_json::from_str::<MappingDocument>(text)
        .map(MappingDocument::into_mappings)
        .map_err(|e| MappingFileError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load mappings from a file
pub fn load_mappings(path: &Path) -> Result<Vec<FieldMapping>, MappingFileError> {
    let text = fs::read_to_string(path).map_err(|source| MappingFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mappings = parse_mappings(&text, path)?;
    log::debug!("Loaded {} mappings from {}", mappings.len(), path.display());
    Ok(mappings)
}

/// Write mappings to a file as indented JSON
pub fn save_mappings(path: &Path, mappings: &[FieldMapping]) -> Result<(), MappingFileError> {
    let document = MappingDocument::Wrapped {
        mappings: mappings.to_vec(),
    };
    let mut text = serde_json::to_string_pretty(&document).map_err(|e| MappingFileError::Serialize {
        message: e.to_string(),
    })?;
    text.push('\n');

    fs::write(path, text).map_err(|source| MappingFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
