use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// One URL per line. Surrounding whitespace is dropped, blank lines and
/// `#` comments are ignored.
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let urls = parse_manifest(&text);
    if urls.is_empty() {
        return Err(Error::EmptyManifest {
            path: path.to_path_buf(),
        });
    }
    Ok(urls)
}
