//! Error types for the CLI

use core_types::SyntaxError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source text failed to parse; displays the full caret diagnostic
    #[error("{}", .0.render())]
    Syntax(#[from] SyntaxError),

    /// Input file could not be read
    #[error("error: could not read file '{path}': {source}")]
    ReadFile {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("error: could not write file '{path}': {source}")]
    WriteFile {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Stream I/O error
    #[error("error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("error: could not serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// REPL error
    #[error("error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
