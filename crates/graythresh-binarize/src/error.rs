//! Error types for graythresh-binarize

use thiserror::Error;

/// Errors that can occur during binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error (window size, dimensions)
    #[error("core error: {0}")]
    Core(#[from] graythresh_core::Error),

    /// Windowed statistics error
    #[error("filter error: {0}")]
    Filter(#[from] graythresh_filter::FilterError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for binarization operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;

impl BinarizeError {
    /// The underlying core error, whether raised here or by the filter crate.
    pub fn core_error(&self) -> Option<&graythresh_core::Error> {
        match self {
            BinarizeError::Core(e) => Some(e),
            BinarizeError::Filter(graythresh_filter::FilterError::Core(e)) => Some(e),
            _ => None,
        }
    }
}
