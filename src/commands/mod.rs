//! Command implementations for artgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus shared helpers for reporting directive warnings
//! and seeding the sampling RNG.

mod generate;
mod run;
mod show;

use crate::cli::Command;
use crate::config::DirectiveWarning;
use crate::error::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Run(args) => run::cmd_run(args),
        Command::Show(args) => show::cmd_show(args),
    }
}

/// Print directive warnings to stderr, holding the console briefly for the
/// kinds a user is likely to scroll past otherwise.
fn report_warnings(warnings: &[DirectiveWarning]) {
    for warning in warnings {
        eprintln!("*** WARNING: {} ***", warning);
        if warning.needs_pause() {
            std::thread::sleep(Duration::from_millis(1500));
        }
    }
}

/// Build the sampling RNG, seeded explicitly for reproducible runs or from
/// the OS otherwise.
fn sampling_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
