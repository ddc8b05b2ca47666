use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

use super::Pattern;

/// Read patterns from an ignore file
///
/// A missing file yields no patterns. Any other read failure is returned to
/// the caller.
pub fn load_ignore_file(path: &Path) -> Result<Vec<Pattern>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No ignore file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read ignore file: {}", path.display()));
        }
    };

    let patterns = parse_ignore_patterns(&content);
    tracing::debug!(
        "Loaded {} patterns from {}",
        patterns.len(),
        path.display()
    );
    Ok(patterns)
}

/// Process ignore file content into patterns (skips comments and blank lines,
/// strips one leading `/`)
pub fn parse_ignore_patterns(content: &str) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix('/').unwrap_or(line);
        patterns.push(Pattern::new(line));
    }

    patterns
}
