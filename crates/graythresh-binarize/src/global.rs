//! Global thresholding
//!
//! One threshold for the whole image, chosen from the gray-level histogram
//! with Otsu's between-class variance criterion. Two formulations are
//! provided:
//!
//! - [`compute_otsu_histogram_threshold`] evaluates every candidate level
//!   directly from cumulative counts and moments
//! - [`compute_otsu_reference_threshold`] is the incremental form that
//!   updates the class means level by level
//!
//! Both pick the earliest level of maximal variance. They may differ on
//! degenerate histograms but separate bimodal images identically.

use crate::BinarizeResult;
use graythresh_core::levels::{BLACK, WHITE};
use graythresh_core::{GRAY_LEVELS, Histogram, Raster};

/// Guard against empty classes in the direct formulation.
const CLASS_EPSILON: f64 = 1e-8;

/// Class-weight cutoff of the incremental formulation.
const WEIGHT_EPSILON: f64 = f32::EPSILON as f64;

/// Binarize with a fixed threshold: 255 where `source > threshold`,
/// otherwise 0.
pub fn threshold_fixed(raster: &Raster, threshold: u8) -> Raster {
    raster.map(|v| if v > threshold { WHITE } else { BLACK })
}

/// Otsu threshold from cumulative counts and moments.
///
/// For each `t`, class 0 holds levels `<= t` and class 1 the rest:
///
/// ```text
/// w0 = C[t] / N                  w1 = (N - C[t]) / N
/// mu0 = M[t] / (C[t] + eps)      mu1 = (M[255] - M[t]) / (N - C[t] + eps)
/// v  = w0 * w1 * (mu0 - mu1)^2
/// ```
///
/// The first `t` with the largest `v` wins; an empty or single-level
/// histogram yields 0.
pub fn compute_otsu_histogram_threshold(hist: &Histogram) -> u8 {
    let total = hist.total();
    if total == 0 {
        return 0;
    }
    let cum = hist.cumulative();
    let moments = hist.cumulative_moments();
    let n = total as f64;
    let total_moment = moments[GRAY_LEVELS - 1] as f64;

    let mut best_t = 0usize;
    let mut best_v = 0.0f64;
    for t in 0..GRAY_LEVELS {
        let c0 = cum[t] as f64;
        let c1 = n - c0;
        let w0 = c0 / n;
        let w1 = c1 / n;
        let mu0 = moments[t] as f64 / (c0 + CLASS_EPSILON);
        let mu1 = (total_moment - moments[t] as f64) / (c1 + CLASS_EPSILON);
        let v = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);
        if v > best_v {
            best_v = v;
            best_t = t;
        }
    }
    best_t as u8
}

/// Otsu threshold by incremental class-mean updates.
///
/// Levels whose lower or upper class weight is below `f32::EPSILON` are
/// skipped.
pub fn compute_otsu_reference_threshold(hist: &Histogram) -> u8 {
    let total = hist.total();
    if total == 0 {
        return 0;
    }
    let scale = 1.0 / total as f64;
    let mu: f64 = hist
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64 * scale)
        .sum();

    let mut q1 = 0.0f64;
    let mut mu1 = 0.0f64;
    let mut max_sigma = 0.0f64;
    let mut max_level = 0usize;
    for (i, &count) in hist.counts().iter().enumerate() {
        let p = count as f64 * scale;
        mu1 *= q1;
        q1 += p;
        let q2 = 1.0 - q1;
        if q1.min(q2) < WEIGHT_EPSILON || q1.max(q2) > 1.0 - WEIGHT_EPSILON {
            continue;
        }
        mu1 = (mu1 + i as f64 * p) / q1;
        let mu2 = (mu - q1 * mu1) / q2;
        let sigma = q1 * q2 * (mu1 - mu2) * (mu1 - mu2);
        if sigma > max_sigma {
            max_sigma = sigma;
            max_level = i;
        }
    }
    max_level as u8
}

/// Binarize with the direct Otsu threshold of the raster's histogram.
pub fn otsu_histogram_threshold(raster: &Raster) -> BinarizeResult<Raster> {
    let t = compute_otsu_histogram_threshold(&raster.gray_histogram());
    log::debug!("otsu (histogram): threshold {t}");
    Ok(threshold_fixed(raster, t))
}

/// Binarize with the incremental Otsu threshold of the raster's histogram.
pub fn otsu_reference_threshold(raster: &Raster) -> BinarizeResult<Raster> {
    let t = compute_otsu_reference_threshold(&raster.gray_histogram());
    log::debug!("otsu (reference): threshold {t}");
    Ok(threshold_fixed(raster, t))
}
