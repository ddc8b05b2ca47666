//! Configuration management for dirtree
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Embedded defaults (`default-config.toml`)
//! 2. `dirtree.toml` at the project root, or the file passed with `--config`
//! 3. `DIRTREE_*` environment variables
//!
//! A depth given on the command line overrides all of them.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::path::Path;

use crate::patterns::{self, IgnorePatternSet};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Project config file name, looked up at the root
pub const PROJECT_CONFIG_FILE: &str = "dirtree.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DIRTREE_";

/// Main configuration structure for dirtree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeConfig {
    /// Default depth limit
    pub max_depth: usize,

    /// Ignore file, relative to the root
    pub ignore_file: String,

    /// Extra patterns, applied after the ignore file's patterns
    #[serde(default)]
    pub extra_patterns: Vec<String>,

    /// Whether to append built-in patterns
    #[serde(default = "default_use_builtin_patterns")]
    pub use_builtin_patterns: bool,

    /// Replacement for the built-in list; `None` keeps the stock list
    #[serde(default)]
    pub builtin_patterns: Option<Vec<String>>,
}

fn default_use_builtin_patterns() -> bool {
    true
}

impl TreeConfig {
    /// Load configuration for the project rooted at `root`
    pub fn load(root: &Path, custom_config: Option<&Path>) -> Result<Self> {
        let figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        let figment = match custom_config {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                tracing::debug!("Using config file {}", path.display());
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(root.join(PROJECT_CONFIG_FILE))),
        };

        // Environment variables always have highest priority
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract a config from an already assembled figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .context("Failed to parse configuration")
    }

    /// Defaults only, ignoring project files and the environment
    pub fn defaults() -> Result<Self> {
        Self::from_figment(Figment::new().merge(Toml::string(DEFAULT_CONFIG)))
    }

    /// Build the pattern set for `root`: ignore file, extras, then built-ins
    pub fn ignore_patterns(&self, root: &Path) -> Result<IgnorePatternSet> {
        let loaded = patterns::load_ignore_file(&root.join(&self.ignore_file))?;
        let mut builder = IgnorePatternSet::builder()
            .patterns(loaded)
            .patterns(self.extra_patterns.iter().map(String::as_str));

        if self.use_builtin_patterns {
            builder = match &self.builtin_patterns {
                Some(custom) => builder.patterns(custom.iter().map(String::as_str)),
                None => builder.builtins(),
            };
        }

        let set = builder.build();
        tracing::debug!("Using {} ignore patterns", set.len());
        Ok(set)
    }
}

#[cfg(test)]
mod tests;
