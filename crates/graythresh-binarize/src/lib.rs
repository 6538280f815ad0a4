//! graythresh-binarize - Grayscale to binary conversion
//!
//! Local methods decide each pixel from its neighborhood:
//!
//! - [`bernsen_threshold`] - local contrast
//! - [`niblack_threshold`] - local mean and standard deviation
//! - [`adaptive_mean_threshold`] - local mean minus a constant
//!
//! Global methods apply one threshold to the whole image:
//!
//! - [`otsu_histogram_threshold`] / [`otsu_reference_threshold`] - Otsu
//! - [`threshold_fixed`] - caller-chosen level
//!
//! Outputs are 0 or 255, except where a local method leaves pixels outside
//! its valid band untouched.
//!
//! # Example
//!
//! ```
//! use graythresh_binarize::{Strategy, ThresholdStrategy};
//! use graythresh_core::Raster;
//!
//! let raster = Raster::from_fn(16, 16, |x, _| if x < 8 { 20 } else { 200 }).unwrap();
//! let binary = Strategy::OtsuHistogram.binarize(&raster).unwrap();
//! assert_eq!(binary.get_pixel(0, 0), Some(0));
//! assert_eq!(binary.get_pixel(15, 0), Some(255));
//! ```

mod error;
pub mod global;
pub mod local;
pub mod strategy;

pub use error::{BinarizeError, BinarizeResult};

pub use global::{
    compute_otsu_histogram_threshold, compute_otsu_reference_threshold, otsu_histogram_threshold,
    otsu_reference_threshold, threshold_fixed,
};
pub use local::{
    AdaptiveOptions, BernsenOptions, NiblackOptions, adaptive_mean_threshold, bernsen_threshold,
    niblack_threshold,
};
pub use strategy::{Strategy, ThresholdStrategy};
