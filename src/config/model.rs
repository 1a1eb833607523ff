//! RenderConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Render options collected from a template's `[config]` block.
///
/// One strongly-typed field per recognized directive key, constructed with
/// built-in defaults and updated in place by the directive interpreter.
/// After directives are applied the config is read-only: the generator reads
/// `delim`, the dispatcher reads everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Prompt production mode for `run` (random draws vs. cross product).
    pub mode: Mode,

    /// Delimiter inserted between fragments of the assembled prompt.
    pub delim: String,

    // =========================================================================
    // Render settings (passed through to the external render command)
    // =========================================================================
    /// Output image width in pixels.
    pub width: u32,

    /// Output image height in pixels.
    pub height: u32,

    /// RNG seed for the render backend (-1 lets the backend choose).
    pub seed: i64,

    /// Diffusion step count.
    pub steps: u32,

    /// Guidance scale.
    pub scale: f64,

    /// Lower bound when the orchestrator varies guidance scale per batch.
    pub min_scale: f64,

    /// Upper bound when the orchestrator varies guidance scale per batch.
    pub max_scale: f64,

    /// Number of images per prompt.
    pub samples: u32,

    /// Render backend batch size.
    pub batch_size: u32,

    // =========================================================================
    // Input image settings (img2img)
    // =========================================================================
    /// Fixed init image path; empty selects txt2img.
    pub input_image: String,

    /// Directory of init images to pick from at random; empty disables.
    pub random_input_image_dir: String,

    /// img2img denoising strength.
    pub strength: f64,

    /// Lower bound when the orchestrator varies strength per batch.
    pub min_strength: f64,

    /// Upper bound when the orchestrator varies strength per batch.
    pub max_strength: f64,

    // =========================================================================
    // Memory / upscale settings
    // =========================================================================
    /// Use the low-memory variants of the render scripts.
    pub sd_low_memory: bool,

    /// Add `--turbo` to the low-memory scripts.
    pub sd_low_mem_turbo: bool,

    /// Run the upscaler after rendering.
    pub use_upscale: bool,

    /// Upscale factor.
    pub upscale_amount: f64,

    /// Enable face enhancement during upscaling.
    pub upscale_face_enh: bool,

    /// Keep the pre-upscale original alongside the upscaled image.
    pub upscale_keep_org: bool,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Base output directory for rendered images.
    pub outdir: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            delim: default_delim(),
            width: default_dimension(),
            height: default_dimension(),
            seed: default_seed(),
            steps: default_steps(),
            scale: default_scale(),
            min_scale: default_scale(),
            max_scale: default_scale(),
            samples: default_one(),
            batch_size: default_one(),
            input_image: String::new(),
            random_input_image_dir: String::new(),
            strength: default_strength(),
            min_strength: default_strength(),
            max_strength: default_strength(),
            sd_low_memory: false,
            sd_low_mem_turbo: false,
            use_upscale: false,
            upscale_amount: default_upscale_amount(),
            upscale_face_enh: false,
            upscale_keep_org: false,
            outdir: default_outdir(),
        }
    }
}

impl RenderConfig {
    /// Serialize the effective config to YAML for display.
    pub fn to_yaml(&self) -> crate::error::Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            crate::error::ArtgenError::UserError(format!(
                "failed to serialize config to YAML: {}",
                e
            ))
        })
    }
}
