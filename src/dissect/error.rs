//! Dissection errors.

use std::path::PathBuf;

/// Errors that can occur while extracting dumps from a trace log.
#[derive(Debug, thiserror::Error)]
pub enum DissectError {
    #[error("Failed to read trace log: {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write dump file: {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid trace pattern: {0}")]
    Pattern(#[from] regex::Error),
}
