//! # dirtree - project directory trees
//!
//! Prints a directory as an ASCII tree, skipping whatever the project's
//! `.gitignore` (plus a few built-in patterns) excludes.
//!
//! ```text
//! proj
//! ├── a.txt
//! └── sub
//!     └── c.txt
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Whole project, up to 7 levels deep
//! dirtree
//!
//! # Two levels of another directory
//! dirtree 2 -C ../other
//! ```
//!
//! The pieces are usable on their own:
//!
//! ```no_run
//! use dirtree::{IgnorePatternSet, SubstringMatcher, TreeRenderer};
//!
//! let patterns = IgnorePatternSet::builder()
//!     .patterns(["target/", "log"])
//!     .builtins()
//!     .build();
//! let matcher = SubstringMatcher::new(patterns);
//! let tree = TreeRenderer::new(".", &matcher).max_depth(Some(2));
//! tree.render(&mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod matcher;
pub mod patterns;
pub mod tree;

pub use cli::{Cli, Output};
pub use config::TreeConfig;
pub use matcher::{PathMatcher, SubstringMatcher, should_ignore};
pub use patterns::{IgnorePatternSet, Pattern};
pub use tree::TreeRenderer;

/// Result type alias for dirtree operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
