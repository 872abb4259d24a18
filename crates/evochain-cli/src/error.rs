//! Error types for the command-line entry point.

use std::path::PathBuf;

use evochain_core::ChainError;

/// Errors that can occur while running the `evochain` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Resolving the chain failed.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Reading fixtures or writing output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
