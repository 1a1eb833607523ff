//! Generation history log.
//!
//! Every dispatched render appends one record to `history.ndjson` inside the
//! output directory (one JSON object per line), so a batch of generated
//! images can always be traced back to the prompt, seed, and command that
//! produced it.

use crate::error::{ArtgenError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One generated-prompt record for the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// RFC3339 timestamp when the prompt was generated.
    pub ts: DateTime<Utc>,

    /// Who ran the generation (e.g. `user@HOST`).
    pub actor: String,

    /// Template file the prompt came from.
    pub template: String,

    /// The generated prompt.
    pub prompt: String,

    /// Seed handed to the render backend (-1 = backend-chosen).
    pub seed: i64,

    /// The dispatched command, shell-joined for readability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl GenerationRecord {
    /// Create a record for a freshly generated prompt.
    pub fn new(template: impl Into<String>, prompt: impl Into<String>, seed: i64) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor_string(),
            template: template.into(),
            prompt: prompt.into(),
            seed,
            command: None,
        }
    }

    /// Attach the dispatched command line.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Serialize to a single NDJSON line.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ArtgenError::UserError(format!("failed to serialize history record: {}", e))
        })
    }
}

/// Identify the user for history records.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the history file inside an output directory.
pub fn history_file_path(outdir: &Path) -> PathBuf {
    outdir.join("history.ndjson")
}

/// Append a record to the history log, creating the output directory and
/// file as needed.
pub fn append_record(outdir: &Path, record: &GenerationRecord) -> Result<()> {
    let json_line = record.to_ndjson_line()?;

    if !outdir.exists() {
        fs::create_dir_all(outdir).map_err(|e| {
            ArtgenError::UserError(format!(
                "failed to create output directory '{}': {}",
                outdir.display(),
                e
            ))
        })?;
    }

    let history_file = history_file_path(outdir);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&history_file)
        .map_err(|e| {
            ArtgenError::UserError(format!(
                "failed to open history file '{}': {}",
                history_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ArtgenError::UserError(format!(
            "failed to write history record to '{}': {}",
            history_file.display(),
            e
        ))
    })?;

    Ok(())
}
