//! Project root resolution
//!
//! The root is passed explicitly to everything downstream; the process
//! working directory is never changed.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Marker whose presence identifies a project root
const PROJECT_MARKER: &str = ".git";

/// Pick the directory to render: `directory` if given, otherwise the project
/// enclosing the current directory, otherwise the current directory
pub fn resolve_root(directory: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = directory {
        if !dir.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }
        return Ok(dir.to_path_buf());
    }

    let current = std::env::current_dir().context("Failed to read current directory")?;
    let root = find_project_root(&current).unwrap_or(current);
    tracing::debug!("Project root: {}", root.display());
    Ok(root)
}

/// Walk up from `start` to the nearest directory containing `.git`
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_MARKER).exists() {
            return Some(current);
        }

        if !current.pop() {
            break;
        }
    }

    None
}
