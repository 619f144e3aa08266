//! Error types for patrolprep operations.
//!
//! This module defines [`PrepError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PrepError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PrepError::Other`) for unexpected errors
//! - An incompatible toolchain is an ordinary, expected outcome — it is a
//!   `Result`, never a panic

use thiserror::Error;

/// Core error type for patrolprep operations.
#[derive(Debug, Error)]
pub enum PrepError {
    /// A version string could not be parsed as `major.minor.patch`.
    #[error("Invalid version '{input}': {message}")]
    InvalidVersionFormat { input: String, message: String },

    /// The Flutter / Patrol CLI / patrol package triple matches no
    /// compatibility table entry.
    #[error(
        "Flutter {flutter}, Patrol CLI {patrol_cli} and patrol {patrol} are not compatible"
    )]
    IncompatibleVersions {
        flutter: String,
        patrol_cli: String,
        patrol: String,
    },

    /// A tool's installed version could not be discovered.
    #[error("Could not detect {tool} version: {message}")]
    VersionDetection { tool: String, message: String },

    /// Installing a tool failed.
    #[error("Failed to install {tool}: {message}")]
    InstallFailed { tool: String, message: String },

    /// Exporting an environment value failed.
    #[error("Failed to export {key}: {message}")]
    ExportFailed { key: String, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for patrolprep operations.
pub type Result<T> = std::result::Result<T, PrepError>;
