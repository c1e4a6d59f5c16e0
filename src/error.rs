//! Error types for the reservoir registry
//!
//! Provides a unified error type for all fallible operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ReservoirError
pub type Result<T> = std::result::Result<T, ReservoirError>;

/// Unified error type for reservoir operations
#[derive(Debug, Error)]
pub enum ReservoirError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The export (or import) file could not be opened
    #[error("Unable to open file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Binary Format Errors
    // -------------------------------------------------------------------------
    #[error("Reservoir name too long for binary record: {len} bytes (max {max}): {name:?}")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("Binary export corruption detected: {0}")]
    Corruption(String),

    #[error("Unsupported binary export version: {0}")]
    UnsupportedVersion(u16),
}

impl ReservoirError {
    /// Build a `FileOpen` error for `path`
    pub(crate) fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }
}
