//! Windowed statistics
//!
//! Min, max, mean and population standard deviation over square windows.
//!
//! [`window_stats`] is the reference: it recomputes everything from the
//! window's samples. [`WindowSums`] answers the same mean/stddev queries in
//! O(1) per pixel from summed-area tables, and [`window_extrema`] produces
//! per-pixel min/max maps with a separable sliding pass. Mean and variance
//! are always derived from exact integer sums, so all three paths agree bit
//! for bit.

use crate::FilterResult;
use graythresh_core::{Raster, Window};

/// Statistics over one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Smallest sample in the window
    pub min: u8,
    /// Largest sample in the window
    pub max: u8,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divides by the pixel count)
    pub stddev: f64,
}

/// Mean and population standard deviation from `S = sum(v)`,
/// `Q = sum(v^2)` over `n` samples.
///
/// `variance = (n*Q - S^2) / n^2`; the numerator is an exact integer and
/// never negative.
#[inline]
pub fn mean_stddev_from_sums(sum: u64, sum_sq: u64, n: u64) -> (f64, f64) {
    let mean = sum as f64 / n as f64;
    let num = (n as u128) * (sum_sq as u128) - (sum as u128) * (sum as u128);
    let variance = num as f64 / ((n as u128) * (n as u128)) as f64;
    (mean, variance.sqrt())
}

/// Compute min, max, mean and stddev over the `size x size` window
/// centered at `(x, y)`.
///
/// # Errors
///
/// Returns `EvenWindowSize` for an even `size` and `InvalidDimensions` if
/// the window does not lie fully inside the raster.
pub fn window_stats(raster: &Raster, x: u32, y: u32, size: u32) -> FilterResult<WindowStats> {
    let window = Window::new(size)?;
    window.check_center(raster, x, y)?;
    let h = window.half();

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    for wy in y - h..=y + h {
        for &v in &raster.row(wy)[(x - h) as usize..=(x + h) as usize] {
            min = min.min(v);
            max = max.max(v);
            sum += v as u64;
            sum_sq += (v as u64) * (v as u64);
        }
    }

    let (mean, stddev) = mean_stddev_from_sums(sum, sum_sq, window.area() as u64);
    Ok(WindowStats {
        min,
        max,
        mean,
        stddev,
    })
}

/// Summed-area tables of `v` and `v^2`.
///
/// Tables are `(width + 1) x (height + 1)` with a leading row and column of
/// zeros, so the sum over `[x0, x1) x [y0, y1)` is a four-corner lookup.
#[derive(Debug, Clone)]
pub struct WindowSums {
    stride: usize,
    sum: Vec<u64>,
    sum_sq: Vec<u64>,
}

impl WindowSums {
    /// Build both integral images.
    pub fn new(raster: &Raster) -> Self {
        let (w, h) = (raster.width() as usize, raster.height() as usize);
        let stride = w + 1;
        let mut sum = vec![0u64; stride * (h + 1)];
        let mut sum_sq = vec![0u64; stride * (h + 1)];

        for y in 0..h {
            let row = raster.row(y as u32);
            let mut row_sum = 0u64;
            let mut row_sq = 0u64;
            for x in 0..w {
                let v = row[x] as u64;
                row_sum += v;
                row_sq += v * v;
                let idx = (y + 1) * stride + x + 1;
                sum[idx] = sum[idx - stride] + row_sum;
                sum_sq[idx] = sum_sq[idx - stride] + row_sq;
            }
        }

        WindowSums {
            stride,
            sum,
            sum_sq,
        }
    }

    #[inline]
    fn rect(table: &[u64], stride: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        table[y1 * stride + x1] + table[y0 * stride + x0]
            - table[y0 * stride + x1]
            - table[y1 * stride + x0]
    }

    /// `(sum(v), sum(v^2))` over the half-open rectangle `[x0, x1) x [y0, y1)`.
    #[inline]
    pub fn rect_sums(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> (u64, u64) {
        let (x0, y0, x1, y1) = (x0 as usize, y0 as usize, x1 as usize, y1 as usize);
        (
            Self::rect(&self.sum, self.stride, x0, y0, x1, y1),
            Self::rect(&self.sum_sq, self.stride, x0, y0, x1, y1),
        )
    }

    /// Mean and stddev of the window centered at `(x, y)`.
    ///
    /// The caller guarantees the window lies inside the raster.
    #[inline]
    pub fn mean_stddev(&self, x: u32, y: u32, window: Window) -> (f64, f64) {
        let h = window.half();
        let (s, q) = self.rect_sums(x - h, y - h, x + h + 1, y + h + 1);
        mean_stddev_from_sums(s, q, window.area() as u64)
    }
}

/// Per-pixel window minimum and maximum maps.
///
/// Inside the valid band each entry is the exact extremum of the full
/// window; outside it the window is clipped to the raster.
#[derive(Debug, Clone)]
pub struct WindowExtrema {
    /// Window minimum at each pixel
    pub min: Raster,
    /// Window maximum at each pixel
    pub max: Raster,
}

/// Sliding extremum over a line, clipped at both ends.
fn line_extrema(line: &[u8], h: usize, lo: &mut [u8], hi: &mut [u8]) {
    let n = line.len();
    for i in 0..n {
        let start = i.saturating_sub(h);
        let end = (i + h + 1).min(n);
        let (mut mn, mut mx) = (u8::MAX, u8::MIN);
        for &v in &line[start..end] {
            mn = mn.min(v);
            mx = mx.max(v);
        }
        lo[i] = mn;
        hi[i] = mx;
    }
}

/// Compute window min/max maps with a separable row-then-column pass.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the window does not fit the raster.
pub fn window_extrema(raster: &Raster, window: Window) -> FilterResult<WindowExtrema> {
    window.check_fits(raster)?;
    let (w, h) = (raster.width() as usize, raster.height() as usize);
    let half = window.half() as usize;

    // Horizontal pass
    let mut hmin = vec![0u8; w * h];
    let mut hmax = vec![0u8; w * h];
    for y in 0..h {
        let line = raster.row(y as u32);
        line_extrema(
            line,
            half,
            &mut hmin[y * w..(y + 1) * w],
            &mut hmax[y * w..(y + 1) * w],
        );
    }

    // Vertical pass over the horizontal results
    let mut vmin = vec![0u8; w * h];
    let mut vmax = vec![0u8; w * h];
    for y in 0..h {
        let start = y.saturating_sub(half);
        let end = (y + half + 1).min(h);
        for x in 0..w {
            let (mut mn, mut mx) = (u8::MAX, u8::MIN);
            for yy in start..end {
                mn = mn.min(hmin[yy * w + x]);
                mx = mx.max(hmax[yy * w + x]);
            }
            vmin[y * w + x] = mn;
            vmax[y * w + x] = mx;
        }
    }

    Ok(WindowExtrema {
        min: Raster::from_vec(raster.width(), raster.height(), vmin)?,
        max: Raster::from_vec(raster.width(), raster.height(), vmax)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graythresh_core::Error;

    fn ramp(w: u32, h: u32) -> Raster {
        Raster::from_fn(w, h, |x, y| ((x * 37 + y * 91) % 251) as u8).unwrap()
    }

    #[test]
    fn test_uniform_window() {
        let raster = Raster::new_filled(5, 5, 100).unwrap();
        let stats = window_stats(&raster, 2, 2, 3).unwrap();
        assert_eq!(
            stats,
            WindowStats {
                min: 100,
                max: 100,
                mean: 100.0,
                stddev: 0.0
            }
        );
    }

    #[test]
    fn test_population_stddev() {
        // 3x3 window: eight 0s and one 90 -> mean 10, var = (8*100 + 6400)/9 = 800
        let mut data = vec![0u8; 9];
        data[4] = 90;
        let raster = Raster::from_vec(3, 3, data).unwrap();
        let stats = window_stats(&raster, 1, 1, 3).unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 90);
        assert_eq!(stats.mean, 10.0);
        assert!((stats.stddev - 800f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_window_outside_band() {
        let raster = Raster::new(5, 5).unwrap();
        assert!(matches!(
            window_stats(&raster, 0, 2, 3),
            Err(crate::FilterError::Core(Error::InvalidDimensions { .. }))
        ));
        assert!(matches!(
            window_stats(&raster, 2, 2, 4),
            Err(crate::FilterError::Core(Error::EvenWindowSize(4)))
        ));
        assert!(matches!(
            window_stats(&raster, 2, 2, 7),
            Err(crate::FilterError::Core(Error::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_sums_match_naive() {
        let raster = ramp(23, 17);
        let sums = WindowSums::new(&raster);
        for size in [1u32, 3, 5, 7] {
            let window = Window::new(size).unwrap();
            let band = window.valid_band(&raster).unwrap();
            for y in band.y.clone() {
                for x in band.x.clone() {
                    let naive = window_stats(&raster, x, y, size).unwrap();
                    let (mean, stddev) = sums.mean_stddev(x, y, window);
                    assert_eq!(mean, naive.mean);
                    assert_eq!(stddev, naive.stddev);
                }
            }
        }
    }

    #[test]
    fn test_extrema_match_naive() {
        let raster = ramp(19, 13);
        for size in [1u32, 3, 5, 9] {
            let window = Window::new(size).unwrap();
            let maps = window_extrema(&raster, window).unwrap();
            let band = window.valid_band(&raster).unwrap();
            for y in band.y.clone() {
                for x in band.x.clone() {
                    let naive = window_stats(&raster, x, y, size).unwrap();
                    assert_eq!(maps.min.get_pixel_unchecked(x, y), naive.min);
                    assert_eq!(maps.max.get_pixel_unchecked(x, y), naive.max);
                }
            }
        }
    }

    #[test]
    fn test_rect_sums_whole_image() {
        let raster = Raster::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let sums = WindowSums::new(&raster);
        assert_eq!(sums.rect_sums(0, 0, 2, 2), (10, 30));
        assert_eq!(sums.rect_sums(1, 0, 2, 2), (6, 20));
    }
}
