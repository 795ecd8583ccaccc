//! Serializing merge results

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::merge::{MergeResult, Record};

/// Error writing merge output
#[derive(Debug)]
pub enum ExportError {
    Serialize { message: String },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Serialize { message } => {
                write!(f, "Failed to serialize output: {}", message)
            }
            ExportError::Io { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::Serialize { .. } => None,
        }
    }
}

/// Serialize any value as JSON indented by `indent` spaces
pub fn to_indented_json<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, ExportError> {
    let indent_str = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| ExportError::Serialize {
            message: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| ExportError::Serialize {
        message: e.to_string(),
    })
}

/// Serialize records the way they are downloaded: a 2-space indented array
pub fn to_pretty_json(records: &[Record]) -> Result<String, ExportError> {
    to_indented_json(records, 2)
}

/// Write records to `path`, returning the number of bytes written
pub fn write_records(path: &Path, records: &[Record], indent: usize) -> Result<usize, ExportError> {
    let text = to_indented_json(records, indent)?;
    write_text(path, &text)
}

/// Write the records and statistics of a merge to `path`
pub fn write_result(
    path: &Path,
    result: &MergeResult,
    indent: usize,
) -> Result<usize, ExportError> {
    let text = to_indented_json(result, indent)?;
    write_text(path, &text)
}

fn write_text(path: &Path, text: &str) -> Result<usize, ExportError> {
    fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(text.len())
}

/// Human-readable size: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Plain-text statistics block for a merge
pub fn render_summary(result: &MergeResult) -> String {
    let stats = &result.statistics;
    let mut lines = vec![
        format!("Entries processed:    {}", stats.total_entries),
        format!("Mapping applications: {}", stats.total_mapping_applications),
        format!("Matched:              {}", stats.matched_count),
        format!("Unmatched:            {}", stats.unmatched_count),
    ];

    if let Some(rate) = stats.match_rate() {
        lines.push(format!("Match rate:           {:.1}%", rate * 100.0));
    }

    if !stats.field_stats.is_empty() {
        lines.push(String::new());
        lines.push("Per field:".to_string());
        for field in &stats.field_stats {
            lines.push(format!(
                "  {}: {} matched, {} unmatched",
                field.field, field.matched, field.unmatched
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{FieldMapping, merge};
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let text = to_pretty_json(&records(json!([{"id": 1, "image": "a.png"}]))).unwrap();
        assert_eq!(text, "[\n  {\n    \"id\": 1,\n    \"image\": \"a.png\"\n  }\n]");
    }

    #[test]
    fn test_custom_indent() {
        let text = to_indented_json(&records(json!([{"id": 1}])), 4).unwrap();
        assert_eq!(text, "[\n    {\n        \"id\": 1\n    }\n]");
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(to_pretty_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
    }

    #[test]
    fn test_write_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged-data.json");
        let data = records(json!([{"id": 1}]));

        let written = write_records(&path, &data, 2).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(written, text.len());
        assert_eq!(text, to_pretty_json(&data).unwrap());
    }

    #[test]
    fn test_write_result_includes_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let result = merge(
            &records(json!([{"assetId": 5}])),
            &records(json!([{"id": 5, "filename": "a.png"}])),
            &[FieldMapping::new("assetId", "image", "id", "filename")],
        );

        write_result(&path, &result, 2).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let written: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(written["mergedData"][0]["image"], json!("a.png"));
        assert_eq!(written["stats"]["matchedMappings"], json!(1));
    }

    #[test]
    fn test_render_summary() {
        let result = merge(
            &records(json!([{"tags": [1, 2]}])),
            &records(json!([{"id": 1, "label": "A"}])),
            &[FieldMapping::new("tags", "labels", "id", "label")],
        );

        let summary = render_summary(&result);
        assert!(summary.contains("Matched:              1"));
        assert!(summary.contains("Match rate:           50.0%"));
        assert!(summary.contains("  tags: 1 matched, 1 unmatched"));
    }
}
