//! Core types for merging

mod key;
mod mapping;
mod result;
mod stats;

pub use key::*;
pub use mapping::*;
pub use result::*;
pub use stats::*;

/// A JSON object with its field order preserved
pub type Record = serde_json::Map<String, serde_json::Value>;
