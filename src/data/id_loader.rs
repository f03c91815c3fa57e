// ============================================================
// Layer 4 — Partition Id Loader
// ============================================================
// Reads a partition id list: one image file name per line.
// Order and duplicates are preserved exactly as written.

use std::{fs, path::Path};

use crate::domain::error::PrepError;

/// Read the ids listed in `path`, trailing newline stripped from each.
/// An empty file gives an empty list.
pub fn read_ids(path: &Path) -> Result<Vec<String>, PrepError> {
    let content = fs::read_to_string(path).map_err(PrepError::io(path))?;
    Ok(parse_ids(&content))
}

pub fn parse_ids(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_string).collect()
}
