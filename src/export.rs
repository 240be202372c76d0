use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::caption::Caption;

// @module: JSON serialization of parsed captions

/// JSON shape of one exported caption record.
#[derive(Serialize)]
struct CaptionRecord<'a> {
    identifier: &'a str,
    start: &'a str,
    end: &'a str,
    text: String,
}

impl<'a> From<&'a Caption> for CaptionRecord<'a> {
    fn from(caption: &'a Caption) -> Self {
        CaptionRecord {
            identifier: &caption.identifier,
            start: &caption.start,
            end: &caption.end,
            text: caption.text(),
        }
    }
}

/// Serializes captions to a pretty-printed JSON array of records.
pub fn captions_to_json(captions: &[Caption]) -> Result<String> {
    let records: Vec<CaptionRecord> = captions.iter().map(CaptionRecord::from).collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize captions to JSON")
}

/// Serializes only the caption texts, one string per caption.
pub fn texts_to_json(captions: &[Caption]) -> Result<String> {
    let texts: Vec<String> = captions.iter().map(Caption::text).collect();
    serde_json::to_string_pretty(&texts).context("Failed to serialize caption texts to JSON")
}

/// Writes serialized JSON to a file, creating parent directories if needed.
pub fn write_json_file<P: AsRef<Path>>(path: P, json: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
