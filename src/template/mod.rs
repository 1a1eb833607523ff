//! Prompt template parsing.
//!
//! A template file is plaintext with `#` comments, one optional `[config]`
//! block of `!KEY=VALUE` directives, and any number of `[prompt ...]`
//! blocks whose lines are fragment tokens:
//!
//! ```text
//! [config]
//! !width=512
//! !delim=" and "
//!
//! [prompt 1-3 ", "]
//! a cat
//! a dog       # tokens may carry trailing comments
//!
//! [prompt]
//! wearing sunglasses
//! ```
//!
//! Loading parses the file once into a [`Template`]; generation then reads
//! the parsed sections repeatedly without touching the file again. Section
//! delimiters default to the config store's delimiter as it stands *before*
//! directives run (the built-in single space), so `!delim` only changes the
//! global inter-fragment delimiter.

mod scanner;
mod section;


pub use section::PromptSection;

use crate::config::{DirectiveWarning, RenderConfig, apply_directives};
use crate::error::{ArtgenError, Result};
use std::path::Path;

/// A parsed prompt template: the section list plus the finalized config.
#[derive(Debug, Clone)]
pub struct Template {
    /// Prompt sections in file order.
    pub sections: Vec<PromptSection>,

    /// Render config after applying the `[config]` block directives.
    pub config: RenderConfig,

    /// Raw config-block lines, kept so directives can be re-applied to a
    /// fresh config if the caller resets it.
    pub config_lines: Vec<String>,
}

impl Template {
    /// Load and parse a template file.
    ///
    /// A missing or unreadable file is a hard failure; everything else
    /// degrades gracefully (empty section list, default config).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, Vec<DirectiveWarning>)> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ArtgenError::TemplateError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::parse(&text))
    }

    /// Parse template text into sections and a finalized config.
    ///
    /// Sections are scanned before directives are applied, so their default
    /// delimiter is the built-in one. Directive warnings are returned for
    /// the caller to report; the parse itself never fails.
    pub fn parse(text: &str) -> (Self, Vec<DirectiveWarning>) {
        let lines: Vec<&str> = text.lines().collect();
        let mut config = RenderConfig::default();

        let config_lines = scanner::scan_config_lines(&lines);
        let sections = scanner::scan_sections(&lines, &config.delim);
        let warnings = apply_directives(&mut config, &config_lines);

        (
            Self {
                sections,
                config,
                config_lines,
            },
            warnings,
        )
    }

    /// Re-apply the stored config-block directives to a fresh default
    /// config, replacing the current one.
    pub fn reset_config(&mut self) -> Vec<DirectiveWarning> {
        let mut config = RenderConfig::default();
        let warnings = apply_directives(&mut config, &self.config_lines);
        self.config = config;
        warnings
    }
}
