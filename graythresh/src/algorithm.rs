//! Named registry of every raster-to-raster operation
//!
//! Each [`Algorithm`] runs with its default parameters. Names are stable
//! and double as output directory names in batch processing.

use crate::{AlgorithmError, AlgorithmResult};
use graythresh_binarize::{Strategy, ThresholdStrategy};
use graythresh_core::{DEFAULT_FILTER_WINDOW, Raster};
use graythresh_filter as filter;
use std::fmt;
use std::str::FromStr;

/// An operation selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bernsen local contrast, `e = 15`, `r = 15`
    Bernsen,
    /// Niblack, `r = 15`, `k = -0.2`
    Niblack,
    /// Adaptive mean, block 11, `c = 3`
    Adaptive,
    /// Otsu from cumulative histogram sums
    OtsuHistogram,
    /// Otsu, incremental formulation
    Otsu,
    /// Logarithmic compression
    Logarithmic,
    /// Linear min-max stretch
    LinearContrast,
    /// 3x3 median
    Median,
    /// 3x3 minimum, zero border
    Minimum,
    /// 3x3 maximum, zero border
    Maximum,
    /// Laplacian sharpening
    Laplacian,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bernsen,
        Algorithm::Niblack,
        Algorithm::Adaptive,
        Algorithm::OtsuHistogram,
        Algorithm::Otsu,
        Algorithm::Logarithmic,
        Algorithm::LinearContrast,
        Algorithm::Median,
        Algorithm::Minimum,
        Algorithm::Maximum,
        Algorithm::Laplacian,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bernsen => "bernsen",
            Algorithm::Niblack => "niblack",
            Algorithm::Adaptive => "adaptive",
            Algorithm::OtsuHistogram => "otsu-histogram",
            Algorithm::Otsu => "otsu",
            Algorithm::Logarithmic => "logarithmic",
            Algorithm::LinearContrast => "linear-contrast",
            Algorithm::Median => "median",
            Algorithm::Minimum => "minimum",
            Algorithm::Maximum => "maximum",
            Algorithm::Laplacian => "laplacian",
        }
    }

    /// Run the algorithm with default parameters.
    pub fn apply(self, raster: &Raster) -> AlgorithmResult<Raster> {
        let out = match self {
            Algorithm::Bernsen => Strategy::Bernsen(Default::default()).binarize(raster)?,
            Algorithm::Niblack => Strategy::Niblack(Default::default()).binarize(raster)?,
            Algorithm::Adaptive => Strategy::AdaptiveMean(Default::default()).binarize(raster)?,
            Algorithm::OtsuHistogram => Strategy::OtsuHistogram.binarize(raster)?,
            Algorithm::Otsu => Strategy::OtsuReference.binarize(raster)?,
            Algorithm::Logarithmic => filter::log_transform(raster)?,
            Algorithm::LinearContrast => filter::linear_contrast_stretch(raster)?,
            Algorithm::Median => filter::median_filter(raster, DEFAULT_FILTER_WINDOW)?,
            Algorithm::Minimum => filter::min_filter(raster, DEFAULT_FILTER_WINDOW)?,
            Algorithm::Maximum => filter::max_filter(raster, DEFAULT_FILTER_WINDOW)?,
            Algorithm::Laplacian => filter::laplacian_sharpen(raster)?,
        };
        log::debug!("{}: {}x{}", self, raster.width(), raster.height());
        Ok(out)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>().unwrap(), a);
            assert_eq!(a.to_string(), a.name());
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Linear-Contrast".parse::<Algorithm>().unwrap(), Algorithm::LinearContrast);
        assert_eq!(" median ".parse::<Algorithm>().unwrap(), Algorithm::Median);
    }

    #[test]
    fn test_unknown_name() {
        let err = "sauvola".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, AlgorithmError::UnknownAlgorithm(ref n) if n == "sauvola"));
    }

    #[test]
    fn test_apply_preserves_dimensions() {
        let raster = Raster::from_fn(20, 18, |x, y| (x * 11 + y * 5) as u8).unwrap();
        for a in Algorithm::ALL {
            let out = a.apply(&raster).unwrap();
            assert_eq!(out.dimensions(), (20, 18), "{a}");
        }
    }
}
