//! Path matching against ignore patterns
//!
//! Matching is a best-effort approximation of ignore-file semantics built on
//! plain string containment. It over-matches on purpose: a file pattern such
//! as `log` excludes every path containing `log` anywhere, `catalog.rs`
//! included. Negated (`!`) patterns are skipped entirely.
//!
//! Paths are root-relative and `/`-separated. The root itself is `"."`.

use crate::patterns::{IgnorePatternSet, Pattern};

/// Decides whether a root-relative path is hidden from the tree
pub trait PathMatcher {
    /// Returns true when `path` should be left out
    fn is_ignored(&self, path: &str) -> bool;

    /// Name of this matcher for logging
    fn name(&self) -> &'static str;
}

/// Containment/suffix matcher over an [`IgnorePatternSet`]
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    patterns: IgnorePatternSet,
}

impl SubstringMatcher {
    pub fn new(patterns: IgnorePatternSet) -> Self {
        Self { patterns }
    }
}

impl PathMatcher for SubstringMatcher {
    fn is_ignored(&self, path: &str) -> bool {
        should_ignore(path, self.patterns.as_slice())
    }

    fn name(&self) -> &'static str {
        "SubstringMatcher"
    }
}

/// Check a path against patterns in order; the first non-negated hit wins
pub fn should_ignore(path: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .filter(|pattern| !pattern.is_negated())
        .any(|pattern| matches_pattern(path, pattern))
}

fn matches_pattern(path: &str, pattern: &Pattern) -> bool {
    let text = pattern.as_str();
    let anchored = format!("/{text}");

    if pattern.is_directory() {
        path.starts_with(text) || path.contains(&anchored)
    } else {
        path.ends_with(text) || path.contains(&anchored) || path.contains(text)
    }
}
