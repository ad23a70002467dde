//! Error types for lintcheck operations.
//!
//! This module defines [`LintcheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every failure that aborts a verification run has its own variant so
//! callers can tell causes apart without parsing messages. The binary still
//! collapses them into one `Verification failed: ...` line and exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lintcheck operations.
#[derive(Debug, Error)]
pub enum LintcheckError {
    /// None of the lint configuration candidates exist in the target directory.
    #[error("No lint configuration found in {directory} (looked for {})", .candidates.join(", "))]
    ConfigurationNotFound {
        directory: PathBuf,
        candidates: Vec<String>,
    },

    /// The package-listing command could not run or exited non-zero.
    #[error("Command failed: {command}: {message}")]
    DependencyToolFailure {
        command: String,
        code: Option<i32>,
        message: String,
    },

    /// A lint command reported violations or could not be found.
    #[error("Command failed: {command} ({name} lint, {})", describe_exit(.code))]
    LintCommandFailure {
        name: String,
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The shell itself could not be spawned.
    #[error("Command failed ({}): {command}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Verifier config file passed with `--config` does not exist.
    #[error("Config file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// Verifier config file is not valid YAML for [`VerifierConfig`](crate::config::VerifierConfig).
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lintcheck operations.
pub type Result<T> = std::result::Result<T, LintcheckError>;

/// Human-readable exit status: `exit code 1`, or `no exit code` when the
/// process never started or was killed by a signal.
pub(crate) fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}
