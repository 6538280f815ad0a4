//! Rank filtering operations
//!
//! Order-statistic filters: minimum, maximum and median over a square
//! window.
//!
//! The minimum and maximum filters only compute pixels whose window lies
//! fully inside the image. Pixels outside that valid band are filled
//! according to [`BorderFill`]; the default is zero. The median filter
//! computes every pixel, replicating edge samples outward.

use crate::FilterResult;
use graythresh_core::{BorderMode, DEFAULT_FILTER_WINDOW, Raster, RasterMut, Window};
use rayon::prelude::*;

/// What min/max filters write outside the valid band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderFill {
    /// Border pixels are 0
    #[default]
    Zero,
    /// Border pixels keep their source value
    CopySource,
}

/// Options for [`min_filter_with`] and [`max_filter_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Window side (must be odd)
    pub kernel_size: u32,
    /// Fill policy outside the valid band
    pub border: BorderFill,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_FILTER_WINDOW,
            border: BorderFill::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

fn extremum_filter(raster: &Raster, options: &RankOptions, which: Extremum) -> FilterResult<Raster> {
    let window = Window::new(options.kernel_size)?;
    let band = window.valid_band(raster)?;
    let maps = crate::windowed::window_extrema(raster, window)?;
    let source = match which {
        Extremum::Min => &maps.min,
        Extremum::Max => &maps.max,
    };

    let mut out = match options.border {
        BorderFill::Zero => RasterMut::new(raster.width(), raster.height())?,
        BorderFill::CopySource => raster.to_mut(),
    };
    for y in band.y.clone() {
        let src = &source.row(y)[band.x.start as usize..band.x.end as usize];
        out.row_mut(y)[band.x.start as usize..band.x.end as usize].copy_from_slice(src);
    }

    log::debug!(
        "{:?} filter: {}x{} kernel {} border {:?}",
        which,
        raster.width(),
        raster.height(),
        options.kernel_size,
        options.border
    );
    Ok(out.into())
}

/// Apply minimum filter with a zero-filled border.
///
/// Each pixel in the valid band becomes the minimum of its
/// `kernel_size x kernel_size` window.
///
/// # Errors
///
/// `EvenWindowSize` for an even kernel, `InvalidDimensions` if the kernel
/// is larger than the image.
pub fn min_filter(raster: &Raster, kernel_size: u32) -> FilterResult<Raster> {
    min_filter_with(
        raster,
        &RankOptions {
            kernel_size,
            ..Default::default()
        },
    )
}

/// Apply maximum filter with a zero-filled border.
pub fn max_filter(raster: &Raster, kernel_size: u32) -> FilterResult<Raster> {
    max_filter_with(
        raster,
        &RankOptions {
            kernel_size,
            ..Default::default()
        },
    )
}

/// Apply minimum filter with explicit options.
pub fn min_filter_with(raster: &Raster, options: &RankOptions) -> FilterResult<Raster> {
    extremum_filter(raster, options, Extremum::Min)
}

/// Apply maximum filter with explicit options.
pub fn max_filter_with(raster: &Raster, options: &RankOptions) -> FilterResult<Raster> {
    extremum_filter(raster, options, Extremum::Max)
}

/// Apply median filter.
///
/// Every pixel is computed; samples beyond the image edge replicate the
/// nearest edge sample. The window is counted with a 256-bin histogram, so
/// the cost per pixel is independent of the sample order.
pub fn median_filter(raster: &Raster, kernel_size: u32) -> FilterResult<Raster> {
    let window = Window::new(kernel_size)?;
    let half = window.half();
    let padded = raster.add_border(half, BorderMode::Replicate)?;
    let (w, _) = raster.dimensions();
    let rank = (window.area() / 2) as u64;

    let mut out = RasterMut::new(raster.width(), raster.height())?;
    out.data_mut()
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, dst) in row.iter_mut().enumerate() {
                let x = x as u32;
                let mut counts = [0u64; 256];
                for wy in y..y + kernel_size {
                    for &v in &padded.row(wy)[x as usize..(x + kernel_size) as usize] {
                        counts[v as usize] += 1;
                    }
                }
                let mut seen = 0u64;
                for (level, &n) in counts.iter().enumerate() {
                    seen += n;
                    if seen > rank {
                        *dst = level as u8;
                        break;
                    }
                }
            }
        });

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;
    use graythresh_core::Error;

    #[test]
    fn test_min_max_3x3() {
        #[rustfmt::skip]
        let data = vec![
            10, 20, 30, 40,
            50, 60, 70, 80,
            90, 15, 25, 35,
            45, 55, 65, 75,
        ];
        let raster = Raster::from_vec(4, 4, data).unwrap();
        let mn = min_filter(&raster, 3).unwrap();
        let mx = max_filter(&raster, 3).unwrap();

        assert_eq!(mn.get_pixel(1, 1), Some(10));
        assert_eq!(mn.get_pixel(2, 1), Some(15));
        assert_eq!(mn.get_pixel(1, 2), Some(15));
        assert_eq!(mx.get_pixel(1, 1), Some(90));
        assert_eq!(mx.get_pixel(2, 2), Some(80));

        // border zero-filled
        for x in 0..4 {
            assert_eq!(mn.get_pixel(x, 0), Some(0));
            assert_eq!(mx.get_pixel(x, 3), Some(0));
        }
        assert_eq!(mx.get_pixel(0, 1), Some(0));
    }

    #[test]
    fn test_copy_source_border() {
        let raster = Raster::from_fn(6, 5, |x, y| (x * 10 + y) as u8).unwrap();
        let options = RankOptions {
            kernel_size: 3,
            border: BorderFill::CopySource,
        };
        let mn = min_filter_with(&raster, &options).unwrap();
        assert_eq!(mn.get_pixel(0, 0), raster.get_pixel(0, 0));
        assert_eq!(mn.get_pixel(5, 4), raster.get_pixel(5, 4));
        assert_eq!(mn.get_pixel(2, 2), Some(11));
    }

    #[test]
    fn test_kernel_one_is_identity_in_band() {
        let raster = Raster::from_fn(5, 4, |x, y| (x + 7 * y) as u8).unwrap();
        assert_eq!(min_filter(&raster, 1).unwrap(), raster);
        assert_eq!(max_filter(&raster, 1).unwrap(), raster);
    }

    #[test]
    fn test_even_kernel() {
        let raster = Raster::new(5, 5).unwrap();
        assert!(matches!(
            min_filter(&raster, 2),
            Err(FilterError::Core(Error::EvenWindowSize(2)))
        ));
    }

    #[test]
    fn test_kernel_larger_than_image() {
        let raster = Raster::new(2, 8).unwrap();
        assert!(matches!(
            max_filter(&raster, 3),
            Err(FilterError::Core(Error::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_median_removes_impulse() {
        let mut m = RasterMut::new_filled(5, 5, 50).unwrap();
        m.set_pixel(2, 2, 255).unwrap();
        m.set_pixel(0, 0, 0).unwrap();
        let raster: Raster = m.into();
        let med = median_filter(&raster, 3).unwrap();
        assert!(med.data().iter().all(|&v| v == 50));
    }

    #[test]
    fn test_median_monotone_ramp_unchanged() {
        let raster = Raster::from_fn(8, 3, |x, _| (x * 20) as u8).unwrap();
        let med = median_filter(&raster, 3).unwrap();
        assert_eq!(med, raster);
    }
}
