//! Configuration types and defaults for artgen.

use serde::{Deserialize, Serialize};

/// How prompts are produced during a `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Draw tokens randomly per section on every generation.
    Random,
    /// Walk the cross product of sections, one token per section (default).
    #[default]
    Combination,
}

impl Mode {
    /// Parse a mode from a directive value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "random" => Some(Self::Random),
            "combination" => Some(Self::Combination),
            _ => None,
        }
    }
}

pub(crate) fn default_dimension() -> u32 {
    512
}

pub(crate) fn default_seed() -> i64 {
    -1
}

pub(crate) fn default_steps() -> u32 {
    80
}

pub(crate) fn default_scale() -> f64 {
    7.5
}

pub(crate) fn default_one() -> u32 {
    1
}

pub(crate) fn default_strength() -> f64 {
    0.75
}

pub(crate) fn default_upscale_amount() -> f64 {
    2.0
}

pub(crate) fn default_delim() -> String {
    " ".to_string()
}

pub(crate) fn default_outdir() -> String {
    "output".to_string()
}
