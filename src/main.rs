use clap::Parser;
use std::process::ExitCode;

use dirtree::{Cli, Output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Output::error(&format!("{err:#}"));
            ExitCode::from(1)
        }
    }
}
