//! Error types for the algorithm registry

use thiserror::Error;

/// Errors from selecting or running a named algorithm
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// No algorithm has the given name
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Filtering or point-transform failure
    #[error("filter error: {0}")]
    Filter(#[from] graythresh_filter::FilterError),

    /// Binarization failure
    #[error("binarize error: {0}")]
    Binarize(#[from] graythresh_binarize::BinarizeError),
}

/// Result type for registry operations
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
