//! Error types for graythresh-core
//!
//! Provides a unified error type for raster construction, window validation
//! and whole-image statistics. Every algorithm crate wraps this type, so a
//! window or dimension failure surfaces with the same variant no matter which
//! operation rejected it.

use thiserror::Error;

/// graythresh core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Raster with a zero dimension
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Window does not fit inside the raster
    #[error("window {window}x{window} does not fit in {width}x{height} raster")]
    InvalidDimensions { window: u32, width: u32, height: u32 },

    /// Window side must be odd
    #[error("window size must be odd, got {0}")]
    EvenWindowSize(u32),

    /// Raster has zero dynamic range
    #[error("degenerate image: every sample equals {value}")]
    DegenerateImage { value: u8 },

    /// Sample buffer length does not match width * height
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for graythresh core operations
pub type Result<T> = std::result::Result<T, Error>;
