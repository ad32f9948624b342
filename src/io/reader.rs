use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read numerals from a file, one per line.
pub fn read_numerals(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let numerals = parse_numerals(&text);
    debug!("Read {} numerals from {:?}", numerals.len(), path);
    Ok(numerals)
}

/// Split `text` into numerals. Surrounding whitespace is trimmed; blank lines and
/// lines starting with `#` are skipped.
pub fn parse_numerals(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
