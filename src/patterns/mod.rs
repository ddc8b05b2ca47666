//! Ignore patterns
//!
//! Patterns are plain text tokens read from the project's ignore file plus a
//! fixed built-in list. They carry no glob semantics; how a token is
//! interpreted is decided by the matcher at match time.

mod loader;

pub use loader::{load_ignore_file, parse_ignore_patterns};

/// Patterns appended after the ignore file's own entries
pub const BUILTIN_PATTERNS: &[&str] = &[
    ".git",
    "__pycache__",
    "*.pyc",
    ".DS_Store",
    "node_modules",
    ".next",
    "out",
    "coverage",
    "build",
];

/// A single ignore token, e.g. `target/` or `.log`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(String);

impl Pattern {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `!`-prefixed patterns are recognized but never applied
    pub fn is_negated(&self) -> bool {
        self.0.starts_with('!')
    }

    /// A trailing separator marks a directory pattern
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Ordered, immutable list of patterns for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePatternSet {
    patterns: Vec<Pattern>,
}

impl IgnorePatternSet {
    pub fn builder() -> IgnorePatternSetBuilder {
        IgnorePatternSetBuilder::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Assembles an [`IgnorePatternSet`]; the set is frozen once built
#[derive(Debug, Default)]
pub struct IgnorePatternSetBuilder {
    patterns: Vec<Pattern>,
}

impl IgnorePatternSetBuilder {
    pub fn patterns<I, P>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn builtins(self) -> Self {
        self.patterns(BUILTIN_PATTERNS.iter().copied())
    }

    pub fn build(self) -> IgnorePatternSet {
        IgnorePatternSet {
            patterns: self.patterns,
        }
    }
}
