//! Command-line interface for dirtree
//!
//! Parses arguments, resolves the project root, loads configuration and
//! patterns, then renders the tree to stdout.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

mod output;
mod root;

pub use output::Output;
pub use root::{find_project_root, resolve_root};

use crate::config::TreeConfig;
use crate::matcher::SubstringMatcher;
use crate::tree::TreeRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "dirtree",
    version = crate::VERSION,
    about = "Print a project's directory tree, honoring its ignore file",
    long_about = "Prints the directory tree of the enclosing project (the nearest ancestor \
                  with a .git entry, or the current directory), skipping paths matched by \
                  the project's .gitignore and a few built-in patterns."
)]
pub struct Cli {
    /// Maximum depth to descend below the root (default 7)
    #[arg(value_name = "DEPTH", allow_negative_numbers = true)]
    pub depth: Option<String>,

    /// Render <DIR> instead of the enclosing project root
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Use custom configuration file instead of dirtree.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let depth = self.depth.as_deref().map(parse_depth).transpose()?;

        let root = resolve_root(self.directory.as_deref())?;
        let config = TreeConfig::load(&root, self.config.as_deref())?;
        let matcher = SubstringMatcher::new(config.ignore_patterns(&root)?);

        let max_depth = match depth {
            None => config.max_depth,
            Some(depth) => match usize::try_from(depth) {
                Ok(depth) => depth,
                Err(_) => {
                    // Even the root sits below a negative limit
                    tracing::debug!("Depth {depth} is negative, nothing to render");
                    return Ok(());
                }
            },
        };

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let rendered = TreeRenderer::new(&root, &matcher)
            .max_depth(Some(max_depth))
            .render(&mut out)
            .and_then(|()| out.flush());

        match rendered {
            // Reader went away (e.g. piped into `head`)
            Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
            other => other.context("Failed to write tree"),
        }
    }
}

/// Parse the DEPTH argument as an integer; negative values render nothing
pub fn parse_depth(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("Invalid depth argument: {raw}"))
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries the tree, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
