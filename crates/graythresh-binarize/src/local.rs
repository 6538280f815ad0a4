//! Local (adaptive) thresholding
//!
//! Per-pixel binarization from a window around each pixel:
//!
//! - Bernsen: local contrast `(max - min) / 2` against a fixed limit
//! - Niblack: local `mean + k * stddev`
//! - Adaptive mean: local mean minus a constant
//!
//! Bernsen and Niblack only decide pixels in the valid band, where the
//! window lies fully inside the image; every other pixel keeps its source
//! value. Adaptive mean replicates edge samples and decides every pixel.

use crate::{BinarizeError, BinarizeResult};
use graythresh_core::levels::{BLACK, WHITE};
use graythresh_core::{BorderMode, DEFAULT_THRESHOLD_WINDOW, Raster, RasterMut, ValidBand, Window};
use graythresh_filter::{WindowSums, window_extrema};
use rayon::prelude::*;

/// Smallest window accepted by the local thresholds.
const MIN_LOCAL_WINDOW: u32 = 3;

/// Options for Bernsen thresholding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernsenOptions {
    /// Contrast limit `e`: windows with `(max - min) / 2 <= e` go to black
    pub contrast: f64,
    /// Window side `r` (odd, >= 3)
    pub window_size: u32,
}

impl Default for BernsenOptions {
    fn default() -> Self {
        Self {
            contrast: 15.0,
            window_size: DEFAULT_THRESHOLD_WINDOW,
        }
    }
}

/// Options for Niblack thresholding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiblackOptions {
    /// Window side `r` (odd, >= 3)
    pub window_size: u32,
    /// Sensitivity `k` in `mean + k * stddev`
    pub k: f64,
}

impl Default for NiblackOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_THRESHOLD_WINDOW,
            k: -0.2,
        }
    }
}

/// Options for adaptive mean thresholding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveOptions {
    /// Block side (odd, >= 3)
    pub block_size: u32,
    /// Constant subtracted from the local mean
    pub c: f64,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            block_size: 11,
            c: 3.0,
        }
    }
}

fn check_finite(name: &str, v: f64) -> BinarizeResult<()> {
    if !v.is_finite() {
        return Err(BinarizeError::InvalidParameters(format!(
            "{name} must be finite, got {v}"
        )));
    }
    Ok(())
}

/// Decide every valid-band pixel with `decide(x, y)`; copy all others.
fn binarize_band<F>(raster: &Raster, band: &ValidBand, decide: F) -> Raster
where
    F: Fn(u32, u32) -> u8 + Sync,
{
    let mut out = raster.to_mut();
    let w = raster.width() as usize;
    let (x0, x1) = (band.x.start, band.x.end);
    out.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .filter(|(y, _)| band.y.contains(&(*y as u32)))
        .for_each(|(y, row)| {
            for x in x0..x1 {
                row[x as usize] = decide(x, y as u32);
            }
        });
    out.into()
}

/// Bernsen thresholding.
///
/// For each pixel in the valid band, with `min`/`max` over the window:
/// `(max - min) / 2 <= contrast` gives 0, otherwise 255. Pixels outside
/// the valid band keep their source value.
///
/// # Errors
///
/// `EvenWindowSize` for an even window, `InvalidDimensions` if the window
/// does not fit the image, `InvalidParameter` for a window below 3 and
/// `InvalidParameters` for a non-finite contrast.
pub fn bernsen_threshold(raster: &Raster, options: &BernsenOptions) -> BinarizeResult<Raster> {
    check_finite("contrast", options.contrast)?;
    let window = Window::with_min(options.window_size, MIN_LOCAL_WINDOW)?;
    let band = window.valid_band(raster)?;
    let maps = window_extrema(raster, window)?;

    log::debug!(
        "bernsen: {}x{} window {} contrast {}",
        raster.width(),
        raster.height(),
        options.window_size,
        options.contrast
    );

    let contrast = options.contrast;
    Ok(binarize_band(raster, &band, |x, y| {
        let lo = maps.min.get_pixel_unchecked(x, y);
        let hi = maps.max.get_pixel_unchecked(x, y);
        let local_contrast = (hi - lo) as f64 / 2.0;
        if local_contrast <= contrast { BLACK } else { WHITE }
    }))
}

/// Niblack thresholding.
///
/// For each pixel in the valid band: `threshold = mean + k * stddev` over
/// the window; a source sample `<= threshold` gives 0, otherwise 255.
/// Pixels outside the valid band keep their source value.
pub fn niblack_threshold(raster: &Raster, options: &NiblackOptions) -> BinarizeResult<Raster> {
    check_finite("k", options.k)?;
    let window = Window::with_min(options.window_size, MIN_LOCAL_WINDOW)?;
    let band = window.valid_band(raster)?;
    let sums = WindowSums::new(raster);

    log::debug!(
        "niblack: {}x{} window {} k {}",
        raster.width(),
        raster.height(),
        options.window_size,
        options.k
    );

    let k = options.k;
    Ok(binarize_band(raster, &band, |x, y| {
        let (mean, stddev) = sums.mean_stddev(x, y, window);
        let threshold = mean + k * stddev;
        if raster.get_pixel_unchecked(x, y) as f64 <= threshold {
            BLACK
        } else {
            WHITE
        }
    }))
}

/// Adaptive mean thresholding.
///
/// The window mean (edges replicated) is rounded to a level `m`; a pixel
/// becomes 255 when `source - m > -ceil(c)`, otherwise 0. Every pixel is
/// decided.
pub fn adaptive_mean_threshold(raster: &Raster, options: &AdaptiveOptions) -> BinarizeResult<Raster> {
    check_finite("c", options.c)?;
    let window = Window::with_min(options.block_size, MIN_LOCAL_WINDOW)?;
    let half = window.half();
    let padded = raster.add_border(half, BorderMode::Replicate)?;
    let sums = WindowSums::new(&padded);
    let n = window.area() as f64;
    let offset = -(options.c.ceil() as i64);

    let w = raster.width() as usize;
    let mut out = RasterMut::new(raster.width(), raster.height())?;
    out.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let src = raster.row(y);
            for (x, dst) in row.iter_mut().enumerate() {
                let x = x as u32;
                let (s, _) = sums.rect_sums(x, y, x + window.size(), y + window.size());
                let mean = (s as f64 / n).round_ties_even() as i64;
                *dst = if src[x as usize] as i64 - mean > offset {
                    WHITE
                } else {
                    BLACK
                };
            }
        });

    log::debug!(
        "adaptive mean: {}x{} block {} c {}",
        raster.width(),
        raster.height(),
        options.block_size,
        options.c
    );
    Ok(out.into())
}
