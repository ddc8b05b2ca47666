//! User-facing diagnostics
//!
//! The tree itself is plain text on stdout; this only covers messages on
//! stderr.

use console::style;

/// Output handler for CLI messages
pub struct Output;

impl Output {
    /// Print an error message, colored only when stderr is a terminal
    pub fn error(message: &str) {
        eprintln!("{}", style(message).red().for_stderr());
    }
}
