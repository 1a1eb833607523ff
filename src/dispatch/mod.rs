//! Render command construction and execution.
//!
//! Builds the argv for the external image-synthesis scripts from the
//! finalized config plus one generated prompt, mirroring the script
//! selection rules of the reference pipeline: `txt2img` vs `img2img` by
//! whether an init image is set, and the `optimized_*` variants (plus
//! `--turbo`) under the low-memory flags. The command is built as a
//! program + argument vector; nothing here is shell-escaped by hand.

#[cfg(test)]
mod tests;

use crate::config::RenderConfig;
use crate::error::{ArtgenError, Result};
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Invalid slug filter regex"));
static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("Invalid slug separator regex"));

/// Slug length cap, for filesystem-safe directory names even when a template
/// stem is very long.
const MAX_SLUG_LEN: usize = 180;

/// A fully constructed render invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    /// The interpreter to run (always `python` for the reference scripts).
    pub program: String,

    /// Arguments, starting with the selected script path.
    pub args: Vec<String>,

    /// Dated per-template output directory the render writes into.
    pub output_dir: String,
}

impl RenderCommand {
    /// Shell-joined command line, for dry runs and history records.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        shell_words::join(&parts)
    }

    /// Run the command and wait for it, failing on spawn errors or a
    /// nonzero exit status.
    pub fn execute(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| {
                ArtgenError::DispatchError(format!(
                    "failed to run '{}': {}",
                    self.display(),
                    e
                ))
            })?;

        if !status.success() {
            return Err(ArtgenError::DispatchError(format!(
                "render command exited with {}: {}",
                status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                self.display()
            )));
        }
        Ok(())
    }
}

/// Build the render command for one prompt.
///
/// The output directory is `<outdir>/<today>-<slug>` where the slug comes
/// from the template file stem.
pub fn build_command(config: &RenderConfig, prompt: &str, template_path: &Path) -> RenderCommand {
    let slug = slugify(&template_stem(template_path));
    let output_dir = format!(
        "{}/{}-{}",
        config.outdir,
        chrono::Local::now().date_naive(),
        slug
    );

    let img2img = !config.input_image.is_empty();
    let script = match (img2img, config.sd_low_memory) {
        (false, false) => "scripts/txt2img.py",
        (false, true) => "scripts/optimized_txt2img.py",
        (true, false) => "scripts/img2img.py",
        (true, true) => "scripts/optimized_img2img.py",
    };

    let mut args = vec![script.to_string()];
    if config.sd_low_memory && config.sd_low_mem_turbo {
        args.push("--turbo".to_string());
    }

    args.push("--skip_grid".to_string());
    args.push("--n_iter".to_string());
    args.push(config.samples.to_string());
    args.push("--prompt".to_string());
    args.push(prompt.to_string());
    args.push("--ddim_steps".to_string());
    args.push(config.steps.to_string());
    args.push("--scale".to_string());
    args.push(config.scale.to_string());
    args.push("--seed".to_string());
    args.push(config.seed.to_string());

    if img2img {
        args.push("--init-img".to_string());
        args.push(config.input_image.clone());
        args.push("--strength".to_string());
        args.push(config.strength.to_string());
    } else {
        args.push("--W".to_string());
        args.push(config.width.to_string());
        args.push("--H".to_string());
        args.push(config.height.to_string());
    }

    args.push("--outdir".to_string());
    args.push(output_dir.clone());

    RenderCommand {
        program: "python".to_string(),
        args,
        output_dir,
    }
}

/// File stem of the template path, for output directory naming.
fn template_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "prompts".to_string())
}

/// Make a filesystem-safe directory name from arbitrary text: lowercase
/// ASCII, punctuation removed, whitespace/dash runs collapsed to single
/// dashes, trimmed, and capped in length.
pub fn slugify(value: &str) -> String {
    let ascii: String = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii())
        .collect();
    let stripped = NON_SLUG_CHARS.replace_all(&ascii, "");
    let dashed = SLUG_SEPARATORS.replace_all(&stripped, "-");
    let trimmed = dashed.trim_matches(['-', '_']);

    trimmed.chars().take(MAX_SLUG_LEN).collect()
}
