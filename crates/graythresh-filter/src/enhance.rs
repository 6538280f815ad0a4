//! Point transforms
//!
//! Whole-image intensity mappings with no neighborhood: logarithmic
//! compression and linear (min-max) contrast stretching. Both build a
//! 256-entry lookup table from global statistics and then map every sample
//! through it.

use crate::FilterResult;
use graythresh_core::{Error, GRAY_LEVELS, Raster};

/// Round half to even and saturate to `[0, 255]`.
#[inline]
fn to_level(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

fn apply_lut(raster: &Raster, lut: &[u8; GRAY_LEVELS]) -> Raster {
    raster.map(|v| lut[v as usize])
}

/// Logarithmic compression.
///
/// `out = round(255 * ln(1 + v) / ln(1 + max))` where `max` is the largest
/// sample. The brightest sample always maps to 255. An all-zero raster has
/// no defined ratio and maps to all zeros.
pub fn log_transform(raster: &Raster) -> FilterResult<Raster> {
    let max = raster.sample_range().max;
    if max == 0 {
        log::debug!("log transform: all-zero raster");
        return Ok(Raster::new(raster.width(), raster.height())?);
    }

    let denom = (max as f64).ln_1p();
    let mut lut = [0u8; GRAY_LEVELS];
    for (v, entry) in lut.iter_mut().enumerate() {
        *entry = to_level(255.0 * (v as f64).ln_1p() / denom);
    }
    Ok(apply_lut(raster, &lut))
}

/// Linear contrast stretch.
///
/// `out = round(255 * (v - min) / (max - min))`, mapping the global minimum
/// to 0 and the global maximum to 255.
///
/// # Errors
///
/// Returns `DegenerateImage` when every sample has the same value.
pub fn linear_contrast_stretch(raster: &Raster) -> FilterResult<Raster> {
    let range = raster.sample_range();
    if range.is_uniform() {
        return Err(Error::DegenerateImage { value: range.min }.into());
    }

    let span = range.span() as f64;
    let mut lut = [0u8; GRAY_LEVELS];
    for v in range.min..=range.max {
        lut[v as usize] = to_level(255.0 * (v - range.min) as f64 / span);
    }
    log::debug!("contrast stretch: [{}, {}] -> [0, 255]", range.min, range.max);
    Ok(apply_lut(raster, &lut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;

    #[test]
    fn test_log_max_maps_to_255() {
        let raster = Raster::from_vec(4, 1, vec![0, 1, 15, 100]).unwrap();
        let out = log_transform(&raster).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(0));
        assert_eq!(out.get_pixel(3, 0), Some(255));
        // 255 * ln 2 / ln 101 = 38.30...
        assert_eq!(out.get_pixel(1, 0), Some(38));
        // 255 * ln 16 / ln 101 = 153.21...
        assert_eq!(out.get_pixel(2, 0), Some(153));
    }

    #[test]
    fn test_log_all_zero() {
        let raster = Raster::new(3, 3).unwrap();
        let out = log_transform(&raster).unwrap();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_log_monotone() {
        let raster = Raster::from_fn(256, 1, |x, _| x as u8).unwrap();
        let out = log_transform(&raster).unwrap();
        assert!(out.data().windows(2).all(|p| p[0] <= p[1]));
        assert_eq!(out.data()[255], 255);
    }

    #[test]
    fn test_stretch_endpoints() {
        let raster = Raster::from_vec(3, 1, vec![50, 100, 150]).unwrap();
        let out = linear_contrast_stretch(&raster).unwrap();
        // 255 * 50 / 100 = 127.5 -> ties to even -> 128
        assert_eq!(out.data(), &[0, 128, 255]);
    }

    #[test]
    fn test_stretch_uniform_fails() {
        let raster = Raster::new_filled(4, 4, 77).unwrap();
        assert!(matches!(
            linear_contrast_stretch(&raster),
            Err(FilterError::Core(Error::DegenerateImage { value: 77 }))
        ));
    }

    #[test]
    fn test_round_ties_even() {
        assert_eq!(to_level(0.5), 0);
        assert_eq!(to_level(1.5), 2);
        assert_eq!(to_level(2.5), 2);
        assert_eq!(to_level(300.0), 255);
    }
}
