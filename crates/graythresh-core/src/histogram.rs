//! Gray-level histograms
//!
//! A [`Histogram`] holds one count per 8-bit intensity level. The counts
//! always sum to the number of pixels the histogram was built from.

use crate::raster::Raster;
use std::ops::Index;

/// Number of intensity levels in an 8-bit raster.
pub const GRAY_LEVELS: usize = 256;

/// 256-bin gray-level histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; GRAY_LEVELS],
}

impl Histogram {
    /// Build a histogram from raw counts.
    pub fn from_counts(counts: [u64; GRAY_LEVELS]) -> Self {
        Histogram { counts }
    }

    /// Count every sample of `raster`.
    pub fn from_raster(raster: &Raster) -> Self {
        let mut counts = [0u64; GRAY_LEVELS];
        for &v in raster.data() {
            counts[v as usize] += 1;
        }
        Histogram { counts }
    }

    /// The raw counts.
    #[inline]
    pub fn counts(&self) -> &[u64; GRAY_LEVELS] {
        &self.counts
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Cumulative counts: `C[t] = sum(counts[0..=t])`.
    pub fn cumulative(&self) -> [u64; GRAY_LEVELS] {
        let mut out = [0u64; GRAY_LEVELS];
        let mut acc = 0u64;
        for (c, &n) in out.iter_mut().zip(self.counts.iter()) {
            acc += n;
            *c = acc;
        }
        out
    }

    /// Cumulative first moments: `M[t] = sum(i * counts[i] for i in 0..=t)`.
    pub fn cumulative_moments(&self) -> [u64; GRAY_LEVELS] {
        let mut out = [0u64; GRAY_LEVELS];
        let mut acc = 0u64;
        for (i, (m, &n)) in out.iter_mut().zip(self.counts.iter()).enumerate() {
            acc += i as u64 * n;
            *m = acc;
        }
        out
    }

    /// Number of levels with a nonzero count.
    pub fn occupied_levels(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }
}

impl Index<u8> for Histogram {
    type Output = u64;

    fn index(&self, level: u8) -> &u64 {
        &self.counts[level as usize]
    }
}

impl Raster {
    /// Gray-level histogram of every sample.
    ///
    /// # Example
    ///
    /// ```
    /// use graythresh_core::Raster;
    ///
    /// let raster = Raster::new(100, 100).unwrap();
    /// let hist = raster.gray_histogram();
    /// assert_eq!(hist[0], 10000);
    /// assert_eq!(hist.total(), 10000);
    /// ```
    pub fn gray_histogram(&self) -> Histogram {
        Histogram::from_raster(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_sums_to_pixel_count() {
        let raster = Raster::from_fn(17, 9, |x, y| (x * 13 + y * 7) as u8).unwrap();
        let hist = raster.gray_histogram();
        assert_eq!(hist.total(), 17 * 9);
    }

    #[test]
    fn test_cumulative() {
        let raster = Raster::from_vec(4, 1, vec![0, 2, 2, 255]).unwrap();
        let hist = raster.gray_histogram();
        let c = hist.cumulative();
        assert_eq!(c[0], 1);
        assert_eq!(c[1], 1);
        assert_eq!(c[2], 3);
        assert_eq!(c[254], 3);
        assert_eq!(c[255], 4);
        assert_eq!(hist.occupied_levels(), 3);
    }

    #[test]
    fn test_cumulative_moments() {
        let raster = Raster::from_vec(3, 1, vec![1, 3, 3]).unwrap();
        let m = raster.gray_histogram().cumulative_moments();
        assert_eq!(m[0], 0);
        assert_eq!(m[1], 1);
        assert_eq!(m[2], 1);
        assert_eq!(m[3], 7);
        assert_eq!(m[255], 7);
    }
}
