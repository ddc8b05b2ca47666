//! Directory tree rendering
//!
//! Walks a directory depth-first and writes one line per visible entry:
//!
//! ```text
//! proj
//! ├── a.txt
//! └── sub
//!     └── c.txt
//! ```
//!
//! Siblings are sorted by name with files and directories intermixed. The
//! branch glyph for an entry is chosen from its position among *all* sorted
//! siblings, before ignored ones are dropped, so a visible entry followed only
//! by ignored siblings still draws `├──`.

use std::ffi::OsString;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::matcher::PathMatcher;

/// Relative path of the root directory as seen by the matcher
pub const ROOT_PATH: &str = ".";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const LAST_CONTINUATION: &str = "    ";

/// Renders the tree under `root`, pruning whatever `matcher` flags
pub struct TreeRenderer<'a, M: PathMatcher + ?Sized> {
    root: PathBuf,
    matcher: &'a M,
    max_depth: Option<usize>,
    root_label: String,
}

impl<'a, M: PathMatcher + ?Sized> TreeRenderer<'a, M> {
    pub fn new(root: impl Into<PathBuf>, matcher: &'a M) -> Self {
        let root = root.into();
        let root_label = root_label(&root);
        Self {
            root,
            matcher,
            max_depth: None,
            root_label,
        }
    }

    /// Levels below the root to descend; `Some(0)` prints the root line only
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Write the whole tree to `out`
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        tracing::debug!(
            "Rendering {} with {} (max depth {:?})",
            self.root.display(),
            self.matcher.name(),
            self.max_depth
        );
        self.render_dir(out, ROOT_PATH, "", 0)
    }

    pub fn render_to_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer)?;
        String::from_utf8(buffer).map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
    }

    fn render_dir<W: Write + ?Sized>(
        &self,
        out: &mut W,
        relative: &str,
        prefix: &str,
        depth: usize,
    ) -> io::Result<()> {
        if self.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        if self.matcher.is_ignored(relative) {
            tracing::trace!("Ignoring directory {relative}");
            return Ok(());
        }

        if depth == 0 {
            writeln!(out, "{}", self.root_label)?;
        }

        // Children of a directory at the limit would sit below it
        if self.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }

        let names = self.list_children(relative);
        let count = names.len();

        for (index, name) in names.iter().enumerate() {
            let is_last = index + 1 == count;
            let name = name.to_string_lossy();
            let child = join_relative(relative, &name);

            if self.matcher.is_ignored(&child) {
                tracing::trace!("Ignoring {child}");
                continue;
            }

            let (branch, continuation) = if is_last {
                (LAST_BRANCH, LAST_CONTINUATION)
            } else {
                (BRANCH, CONTINUATION)
            };

            writeln!(out, "{prefix}{branch}{name}")?;

            if self.fs_path(&child).is_dir() {
                let child_prefix = format!("{prefix}{continuation}");
                self.render_dir(out, &child, &child_prefix, depth + 1)?;
            }
        }

        Ok(())
    }

    /// Sorted child names; unreadable directories list as empty
    fn list_children(&self, relative: &str) -> Vec<OsString> {
        let path = self.fs_path(relative);
        match read_names(&path) {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(err) if matches!(err.kind(), ErrorKind::PermissionDenied | ErrorKind::NotFound) => {
                tracing::trace!("Skipping {}: {}", path.display(), err);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("Failed to list {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    fn fs_path(&self, relative: &str) -> PathBuf {
        if relative == ROOT_PATH {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}

fn read_names(path: &Path) -> io::Result<Vec<OsString>> {
    std::fs::read_dir(path)?
        .map(|entry| entry.map(|entry| entry.file_name()))
        .collect()
}

/// Children of the root are bare names; deeper entries are `/`-joined
fn join_relative(parent: &str, name: &str) -> String {
    if parent == ROOT_PATH {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Final component of the canonical root, or the path as given
fn root_label(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
