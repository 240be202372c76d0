use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::errors::{ParseError, ParseResult};

// @module: Encoding-aware line source feeding the parsers

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a caption file into the ordered line sequence the parsers expect:
/// UTF-8 with an optional byte-order mark, trailing newlines stripped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("Failed to read caption file: {}", path.display()))?;
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);
    let content = std::str::from_utf8(raw)
        .with_context(|| format!("Caption file is not valid UTF-8: {}", path.display()))?;

    let lines = lines_from_str(content)?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Splits already-decoded content into lines, stripping `\r\n` endings.
/// An empty input is itself an error, so parsers can assume at least one
/// line.
pub fn lines_from_str(content: &str) -> ParseResult<Vec<String>> {
    let lines: Vec<String> = content.lines().map(str::to_owned).collect();
    if lines.is_empty() {
        return Err(ParseError::MalformedFile("The file is empty.".to_string()));
    }
    Ok(lines)
}
