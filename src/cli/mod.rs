//! CLI argument parsing for artgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Artgen: template-driven prompt generator and batch dispatcher for
/// image-synthesis pipelines.
///
/// Prompts are described by a plaintext template file:
/// - a `[config]` block of `!KEY=VALUE` render directives
/// - `[prompt ...]` blocks of phrase fragments, sampled per generation
#[derive(Parser, Debug)]
#[command(name = "artgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for artgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate prompts from a template and print them to stdout.
    ///
    /// Always samples randomly, regardless of the template's mode.
    Generate(GenerateArgs),

    /// Generate prompts and dispatch the external render command for each.
    ///
    /// Honors the template's `!mode` directive: `random` draws prompts,
    /// `combination` walks the cross product of the sections.
    Run(RunArgs),

    /// Show a parsed template: sections, cardinalities, and effective config.
    Show(ShowArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the prompt template file.
    pub template: PathBuf,

    /// Number of prompts to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,

    /// Seed for the sampling RNG (for reproducible output).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Prompt template files to process, in order.
    pub templates: Vec<PathBuf>,

    /// Plaintext list file naming additional templates (one per line,
    /// `#` comments allowed).
    #[arg(long)]
    pub list: Option<PathBuf>,

    /// Prompts to render per template. In combination mode, 0 means all
    /// combinations.
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Print each render command instead of executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Seed for the sampling RNG (for reproducible output).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the prompt template file.
    pub template: PathBuf,

    /// Also dump the effective config as YAML.
    #[arg(long)]
    pub config: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
