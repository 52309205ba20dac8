//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing tool, git included, is *not* an error: checks report it
//!   through their status types and the run degrades gracefully
//! - Network, filesystem and process failures are errors and end the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Downloading a file failed.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// Extracting a downloaded archive failed.
    #[error("Failed to extract {path}: {message}")]
    ExtractFailed { path: PathBuf, message: String },

    /// Handing an installer to the OS failed.
    #[error("Failed to launch {path}: {message}")]
    LaunchFailed { path: PathBuf, message: String },

    /// A process could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
