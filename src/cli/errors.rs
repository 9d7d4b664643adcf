//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the CLI entry point
#[derive(Debug, Error)]
pub enum CliError {
    /// Server or runtime I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
