//! Field-mapping merge for JSON record collections
//!
//! Takes an "entries" collection and an "assets" collection and produces a
//! copy of the entries where selected fields are replaced by values looked
//! up from the assets, together with match statistics.
//!
//! ```
//! use asset_merge::{merge, FieldMapping, Record};
//! use serde_json::json;
//!
//! let entries: Vec<Record> =
//!     serde_json::from_value(json!([{"id": 1, "assetId": 5}])).unwrap();
//! let assets: Vec<Record> =
//!     serde_json::from_value(json!([{"id": 5, "filename": "a.png"}])).unwrap();
//! let mapping =
//!     FieldMapping::new("assetId", "image", "id", "filename").with_remove_original(true);
//!
//! let result = merge(&entries, &assets, &[mapping]);
//! assert_eq!(result.merged_records[0]["image"], json!("a.png"));
//! assert_eq!(result.statistics.matched_count, 1);
//! ```

pub mod config;
pub mod io;
pub mod mapping;
pub mod merge;

pub use config::{Config, ConfigError};
pub use io::{LoadError, load_inputs, load_records, parse_records};
pub use mapping::{MappingDefaults, MappingFileError};
pub use merge::*;
