//! Render configuration for artgen.
//!
//! This module defines the typed `RenderConfig` struct that holds every
//! recognized template option with its built-in default, plus the directive
//! interpreter that applies `!KEY=VALUE` lines from a template's `[config]`
//! block. Invalid directive values never clobber the previous value; they
//! produce structured warnings for the caller to report.

mod directives;
mod model;
pub mod types;


// Re-export public API
pub use directives::{DirectiveWarning, apply_directives, parse_directive};
pub use model::RenderConfig;
pub use types::Mode;
