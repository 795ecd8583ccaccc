//! User configuration
//!
//! Read from `<config dir>/asset-merge/config.toml`. Every key is optional;
//! a missing file means all defaults.
//!
//! ```toml
//! default_match_key = "id"
//! default_replace_with_key = "filename"
//! strip_suffix = "Id"
//! output_file = "merged-data.json"
//! indent = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mapping::MappingDefaults;

/// Error loading the configuration file
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse { path: PathBuf, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Invalid config '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { .. } => None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Match key for newly created mappings
    pub default_match_key: String,
    /// Replace-with key for newly created mappings
    pub default_replace_with_key: String,
    /// Suffix stripped from source fields to name target fields
    pub strip_suffix: String,
    /// File name used by `merge --download`
    pub output_file: String,
    /// Spaces per indentation level in written JSON
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = MappingDefaults::default();
        Config {
            default_match_key: defaults.match_key,
            default_replace_with_key: defaults.replace_with_key,
            strip_suffix: defaults.strip_suffix,
            output_file: "merged-data.json".to_string(),
            indent: 2,
        }
    }
}

impl Config {
    /// Default config file location (~/.config/asset-merge/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("asset-merge").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// Only an explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load from a specific file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Mapping defaults derived from this config
    pub fn mapping_defaults(&self) -> MappingDefaults {
        MappingDefaults {
            match_key: self.default_match_key.clone(),
            replace_with_key: self.default_replace_with_key.clone(),
            strip_suffix: self.strip_suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_file, "merged-data.json");
        assert_eq!(config.indent, 2);
        assert_eq!(config.mapping_defaults(), MappingDefaults::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let text = "default_match_key = \"uuid\"\nindent = 4\n";
        let config = Config::parse(text, Path::new("config.toml")).unwrap();
        assert_eq!(config.default_match_key, "uuid");
        assert_eq!(config.indent, 4);
        assert_eq!(config.default_replace_with_key, "filename");
        assert_eq!(config.strip_suffix, "Id");
    }

    #[test]
    fn test_invalid_file() {
        let result = Config::parse("indent = \"wide\"", Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_file = \"out.json\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output_file, "out.json");

        let missing = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
