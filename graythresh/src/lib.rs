//! graythresh - Grayscale binarization and local filtering
//!
//! Classic single-channel image operations on 8-bit rasters:
//!
//! - Local binarization (Bernsen, Niblack, adaptive mean)
//! - Global binarization (Otsu, fixed threshold)
//! - Order-statistic filters (min, max, median)
//! - Point transforms (logarithmic, linear contrast stretch)
//! - Laplacian sharpening
//! - PNG input and output
//!
//! # Example
//!
//! ```
//! use graythresh::{Algorithm, Raster};
//!
//! let raster = Raster::from_fn(32, 32, |x, _| if x < 16 { 40 } else { 210 }).unwrap();
//! let algorithm: Algorithm = "otsu".parse().unwrap();
//! let binary = algorithm.apply(&raster).unwrap();
//! assert_eq!(binary.get_pixel(0, 0), Some(0));
//! assert_eq!(binary.get_pixel(31, 0), Some(255));
//! ```

mod algorithm;
mod error;

// Re-export core types (primary data structures used everywhere)
pub use graythresh_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use graythresh_binarize as binarize;
pub use graythresh_filter as filter;
pub use graythresh_io as io;

pub use algorithm::Algorithm;
pub use error::{AlgorithmError, AlgorithmResult};
