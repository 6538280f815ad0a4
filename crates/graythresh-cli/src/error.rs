//! Error types for batch processing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole batch
#[derive(Debug, Error)]
pub enum BatchError {
    /// Input directory does not exist
    #[error("input directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Input directory could not be listed
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Empty algorithm selection
    #[error("no algorithm selected")]
    NoAlgorithms,
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;
