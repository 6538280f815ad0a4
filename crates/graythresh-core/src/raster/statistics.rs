//! Whole-image statistics
//!
//! Global extrema and mean over every sample. Windowed statistics live in
//! `graythresh-filter`.

use super::Raster;

/// Global minimum and maximum sample of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    /// Smallest sample
    pub min: u8,
    /// Largest sample
    pub max: u8,
}

impl SampleRange {
    /// `max - min`.
    #[inline]
    pub fn span(&self) -> u8 {
        self.max - self.min
    }

    /// True when every sample has the same value.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}

impl Raster {
    /// Compute the global minimum and maximum in a single pass.
    pub fn sample_range(&self) -> SampleRange {
        let (min, max) = self
            .data()
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        SampleRange { min, max }
    }

    /// Arithmetic mean of all samples.
    pub fn mean_value(&self) -> f64 {
        let sum: u64 = self.data().iter().map(|&v| v as u64).sum();
        sum as f64 / self.len() as f64
    }
}
