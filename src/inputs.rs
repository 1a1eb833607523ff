//! Input image directory management.
//!
//! When a template sets `random_input_image_dir`, each render picks a random
//! init image from that directory. Only `.jpg` and `.png` files are
//! considered; the scan is non-recursive and happens once at load time.

use crate::error::{ArtgenError, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// A directory of candidate init images.
#[derive(Debug, Clone)]
pub struct InputDir {
    /// The scanned directory.
    pub directory: PathBuf,
    /// Image file names (not full paths) found in the directory.
    files: Vec<String>,
}

impl InputDir {
    /// Scan a directory for `.jpg`/`.png` files.
    ///
    /// The directory was named explicitly in the template config, so a
    /// missing or unreadable directory is a hard error rather than an empty
    /// result.
    pub fn scan<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();
        let entries = std::fs::read_dir(directory).map_err(|e| {
            ArtgenError::UserError(format!(
                "failed to read input image directory '{}': {}",
                directory.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ArtgenError::UserError(format!(
                    "failed to read entry in '{}': {}",
                    directory.display(),
                    e
                ))
            })?;
            let name = entry.file_name().to_string_lossy().to_string();
            if has_image_extension(&name) {
                files.push(name);
            }
        }
        // Directory iteration order is platform-dependent.
        files.sort();

        Ok(Self {
            directory: directory.to_path_buf(),
            files,
        })
    }

    /// Pick a random image file name, or `None` if the directory held no
    /// images.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.files.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.files.len());
        Some(&self.files[idx])
    }

    /// Full path of a picked file.
    pub fn full_path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Number of usable images found.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the directory held no usable images.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".png")
}
