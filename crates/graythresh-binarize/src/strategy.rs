//! Uniform selection of a binarization method

use crate::global::{otsu_histogram_threshold, otsu_reference_threshold};
use crate::local::{
    AdaptiveOptions, BernsenOptions, NiblackOptions, adaptive_mean_threshold, bernsen_threshold,
    niblack_threshold,
};
use crate::BinarizeResult;
use graythresh_core::Raster;

/// A method that turns a grayscale raster into a binary (0/255) one.
pub trait ThresholdStrategy {
    /// Short identifier of the method.
    fn name(&self) -> &'static str;

    /// Binarize `raster`.
    fn binarize(&self, raster: &Raster) -> BinarizeResult<Raster>;
}

/// Every binarization method with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Local contrast (Bernsen)
    Bernsen(BernsenOptions),
    /// Local mean and deviation (Niblack)
    Niblack(NiblackOptions),
    /// Global Otsu, direct formulation
    OtsuHistogram,
    /// Global Otsu, incremental formulation
    OtsuReference,
    /// Local mean minus a constant
    AdaptiveMean(AdaptiveOptions),
}

impl ThresholdStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Bernsen(_) => "bernsen",
            Strategy::Niblack(_) => "niblack",
            Strategy::OtsuHistogram => "otsu-histogram",
            Strategy::OtsuReference => "otsu",
            Strategy::AdaptiveMean(_) => "adaptive",
        }
    }

    fn binarize(&self, raster: &Raster) -> BinarizeResult<Raster> {
        match self {
            Strategy::Bernsen(options) => bernsen_threshold(raster, options),
            Strategy::Niblack(options) => niblack_threshold(raster, options),
            Strategy::OtsuHistogram => otsu_histogram_threshold(raster),
            Strategy::OtsuReference => otsu_reference_threshold(raster),
            Strategy::AdaptiveMean(options) => adaptive_mean_threshold(raster, options),
        }
    }
}
