//! Directive interpreter for `[config]` block lines.
//!
//! A directive has the form `!NAME=VALUE`: the name is matched
//! case-insensitively against the fixed key universe, the value is validated
//! against the key's type, and only valid values are committed. Invalid
//! values leave the previous config value untouched and surface as a
//! [`DirectiveWarning`] so the command layer can report them. Lines that do
//! not look like directives at all are ignored silently, which permits
//! free-form notes inside the config block.

use super::model::RenderConfig;
use super::types::Mode;
use std::fmt;
use std::str::FromStr;

/// A recoverable problem found while applying a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveWarning {
    /// A numeric key received a value that does not parse as a number.
    InvalidNumber {
        /// The directive key.
        key: &'static str,
        /// The offending value.
        value: String,
    },
    /// The `delim` value was not wrapped in double quotes.
    UnquotedDelim {
        /// The offending value.
        value: String,
    },
    /// The directive name is not in the recognized key universe.
    UnknownDirective {
        /// The unrecognized name.
        name: String,
    },
}

impl fmt::Display for DirectiveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveWarning::InvalidNumber { key, value } => {
                write!(
                    f,
                    "directive '{}' value '{}' is not a valid number; it will be ignored",
                    key.to_uppercase(),
                    value
                )
            }
            DirectiveWarning::UnquotedDelim { value } => {
                write!(
                    f,
                    "directive 'DELIM' value ({}) not understood (make sure to put quotes around it); it will be ignored",
                    value
                )
            }
            DirectiveWarning::UnknownDirective { name } => {
                write!(
                    f,
                    "directive '{}' not recognized; it will be ignored",
                    name.to_uppercase()
                )
            }
        }
    }
}

impl DirectiveWarning {
    /// Whether this warning should hold the console briefly so the user
    /// notices it before output scrolls on.
    pub fn needs_pause(&self) -> bool {
        matches!(
            self,
            DirectiveWarning::UnquotedDelim { .. } | DirectiveWarning::UnknownDirective { .. }
        )
    }
}

/// Split a config line into a lowercased directive name and a lowercased,
/// trimmed value. Returns `None` for anything that is not `!name=value`.
pub fn parse_directive(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix('!')?;
    let (name, value) = rest.split_once('=')?;
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    // The whole value is lowercased, paths included.
    let value = value.trim().to_lowercase();
    Some((name, value))
}

/// Apply every directive found in the config-block lines, in order.
///
/// Returns the warnings encountered; the config retains its previous value
/// for every directive that warned.
pub fn apply_directives(config: &mut RenderConfig, lines: &[String]) -> Vec<DirectiveWarning> {
    let mut warnings = Vec::new();
    for line in lines {
        if let Some((name, value)) = parse_directive(line) {
            if let Some(warning) = apply_one(config, &name, &value) {
                warnings.push(warning);
            }
        }
    }
    warnings
}

/// Apply a single named directive. Returns a warning if the value was
/// rejected, `None` if it was committed or silently ignored.
fn apply_one(config: &mut RenderConfig, name: &str, value: &str) -> Option<DirectiveWarning> {
    match name {
        "width" => set_number(&mut config.width, "width", value),
        "height" => set_number(&mut config.height, "height", value),
        "seed" => set_number(&mut config.seed, "seed", value),
        "steps" => set_number(&mut config.steps, "steps", value),
        "scale" => set_number(&mut config.scale, "scale", value),
        "min_scale" => set_number(&mut config.min_scale, "min_scale", value),
        "max_scale" => set_number(&mut config.max_scale, "max_scale", value),
        "samples" => set_number(&mut config.samples, "samples", value),
        "batch_size" => set_number(&mut config.batch_size, "batch_size", value),
        "strength" => set_number(&mut config.strength, "strength", value),
        "min_strength" => set_number(&mut config.min_strength, "min_strength", value),
        "max_strength" => set_number(&mut config.max_strength, "max_strength", value),
        "upscale_amount" => set_number(&mut config.upscale_amount, "upscale_amount", value),
        "sd_low_memory" => set_yes_no(&mut config.sd_low_memory, value),
        "sd_low_mem_turbo" => set_yes_no(&mut config.sd_low_mem_turbo, value),
        "use_upscale" => set_yes_no(&mut config.use_upscale, value),
        "upscale_face_enh" => set_yes_no(&mut config.upscale_face_enh, value),
        "upscale_keep_org" => set_yes_no(&mut config.upscale_keep_org, value),
        "mode" => {
            if let Some(mode) = Mode::from_str(value) {
                config.mode = mode;
            }
            None
        }
        "delim" => set_delim(config, value),
        "input_image" => {
            if !value.is_empty() {
                config.input_image = value.to_string();
            }
            None
        }
        "random_input_image_dir" => {
            if !value.is_empty() {
                config.random_input_image_dir = value.to_string();
            }
            None
        }
        "outdir" => {
            if !value.is_empty() {
                config.outdir = value.to_string();
            }
            None
        }
        _ => Some(DirectiveWarning::UnknownDirective {
            name: name.to_string(),
        }),
    }
}

/// Validate and store a numeric directive value. Empty values are ignored
/// silently; unparseable values warn and keep the previous value.
fn set_number<T: FromStr>(
    field: &mut T,
    key: &'static str,
    value: &str,
) -> Option<DirectiveWarning> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => {
            *field = parsed;
            None
        }
        Err(_) => Some(DirectiveWarning::InvalidNumber {
            key,
            value: value.to_string(),
        }),
    }
}

/// Update a boolean field only on an exact `yes`/`no`; anything else is
/// ignored without a warning.
fn set_yes_no(field: &mut bool, value: &str) -> Option<DirectiveWarning> {
    match value {
        "yes" => *field = true,
        "no" => *field = false,
        _ => {}
    }
    None
}

/// The delimiter value must keep its surrounding double quotes so that
/// leading/trailing spaces survive the trim; the quotes are stripped here.
fn set_delim(config: &mut RenderConfig, value: &str) -> Option<DirectiveWarning> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with('"') && value.ends_with('"') {
        config.delim = value.trim_matches('"').to_string();
        None
    } else {
        Some(DirectiveWarning::UnquotedDelim {
            value: value.to_string(),
        })
    }
}
