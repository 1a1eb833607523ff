//! Error types for the artgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for artgen operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum ArtgenError {
    /// User provided invalid arguments or paths.
    #[error("{0}")]
    UserError(String),

    /// Prompt template file could not be read.
    #[error("Template failure: {0}")]
    TemplateError(String),

    /// External render command could not be started or failed.
    #[error("Dispatch failed: {0}")]
    DispatchError(String),
}

impl ArtgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArtgenError::UserError(_) => exit_codes::USER_ERROR,
            ArtgenError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            ArtgenError::DispatchError(_) => exit_codes::DISPATCH_FAILURE,
        }
    }
}

/// Result type alias for artgen operations.
pub type Result<T> = std::result::Result<T, ArtgenError>;
