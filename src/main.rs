//! Artgen: template-driven prompt generator and batch dispatcher for
//! image-synthesis pipelines.
//!
//! This is the main entry point for the `artgen` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod history;
pub mod inputs;
pub mod listfile;
pub mod template;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
