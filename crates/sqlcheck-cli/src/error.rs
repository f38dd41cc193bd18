//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors raised while loading sources or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The sources directory does not exist.
    #[error("Sources directory not found: {0}")]
    SourcesDirNotFound(PathBuf),

    /// The requested source file does not exist.
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// IO error while reading sources.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the report.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, CliError>;
