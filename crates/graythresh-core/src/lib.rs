//! graythresh-core - Basic data structures for grayscale image processing
//!
//! This crate provides the types shared by every algorithm in the
//! workspace:
//!
//! - [`Raster`] / [`RasterMut`] - 8-bit grayscale image (immutable / mutable)
//! - [`Window`] / [`ValidBand`] - odd square neighborhoods and where they fit
//! - [`Histogram`] - 256-bin gray-level histogram
//! - [`Error`] - construction and validation failures

pub mod error;
pub mod histogram;
pub mod raster;
pub mod window;

pub use error::{Error, Result};
pub use histogram::{GRAY_LEVELS, Histogram};
pub use raster::{BorderMode, Raster, RasterMut, SampleRange};
pub use window::{DEFAULT_FILTER_WINDOW, DEFAULT_THRESHOLD_WINDOW, ValidBand, Window};

/// Binarization foreground / background levels.
pub mod levels {
    /// Output level for samples at or below the threshold
    pub const BLACK: u8 = 0;
    /// Output level for samples above the threshold
    pub const WHITE: u8 = 255;
}
