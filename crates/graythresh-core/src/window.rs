//! Square odd-sized windows
//!
//! A [`Window`] of side `r` centered at `(x, y)` covers
//! `[x - r/2, x + r/2] x [y - r/2, y + r/2]`. The window is *valid* at a
//! pixel when it lies fully inside the raster; the set of such pixels is the
//! [`ValidBand`].

use crate::error::{Error, Result};
use crate::raster::Raster;
use std::ops::Range;

/// Default window side for local thresholding.
pub const DEFAULT_THRESHOLD_WINDOW: u32 = 15;

/// Default window side for order-statistic filters.
pub const DEFAULT_FILTER_WINDOW: u32 = 3;

/// A square window with odd side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    size: u32,
}

impl Window {
    /// Create a window of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EvenWindowSize`] for an even size (including 0).
    pub fn new(size: u32) -> Result<Self> {
        if size % 2 == 0 {
            return Err(Error::EvenWindowSize(size));
        }
        Ok(Window { size })
    }

    /// Create a window of side `size`, additionally requiring `size >= min`.
    pub fn with_min(size: u32, min: u32) -> Result<Self> {
        let window = Self::new(size)?;
        if size < min {
            return Err(Error::InvalidParameter(format!(
                "window size must be >= {min}, got {size}"
            )));
        }
        Ok(window)
    }

    /// Side length `r`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Half-extent `h = r / 2`.
    #[inline]
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    /// Number of pixels covered, `r * r`.
    #[inline]
    pub fn area(&self) -> u32 {
        self.size * self.size
    }

    /// Check that the window fits inside `raster`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the window is wider or taller
    /// than the raster.
    pub fn check_fits(&self, raster: &Raster) -> Result<()> {
        let (width, height) = raster.dimensions();
        if self.size > width || self.size > height {
            return Err(Error::InvalidDimensions {
                window: self.size,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Compute the valid band of this window in `raster`.
    pub fn valid_band(&self, raster: &Raster) -> Result<ValidBand> {
        self.check_fits(raster)?;
        let h = self.half();
        let (width, height) = raster.dimensions();
        Ok(ValidBand {
            x: h..width - h,
            y: h..height - h,
        })
    }

    /// Check that the window centered at `(x, y)` lies inside `raster`.
    pub fn check_center(&self, raster: &Raster, x: u32, y: u32) -> Result<()> {
        let band = self.valid_band(raster)?;
        if !band.contains(x, y) {
            return Err(Error::InvalidDimensions {
                window: self.size,
                width: raster.width(),
                height: raster.height(),
            });
        }
        Ok(())
    }
}

/// The pixels at which a window lies fully inside the raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBand {
    /// Valid columns, `h..width - h`
    pub x: Range<u32>,
    /// Valid rows, `h..height - h`
    pub y: Range<u32>,
}

impl ValidBand {
    /// True if `(x, y)` is inside the band.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_rejected() {
        assert_eq!(Window::new(4).unwrap_err(), Error::EvenWindowSize(4));
        assert_eq!(Window::new(0).unwrap_err(), Error::EvenWindowSize(0));
        assert!(Window::new(1).is_ok());
    }

    #[test]
    fn test_with_min() {
        assert!(Window::with_min(1, 3).is_err());
        assert_eq!(Window::with_min(2, 3).unwrap_err(), Error::EvenWindowSize(2));
        assert_eq!(Window::with_min(3, 3).unwrap().half(), 1);
    }

    #[test]
    fn test_valid_band() {
        let raster = Raster::new(10, 7).unwrap();
        let band = Window::new(5).unwrap().valid_band(&raster).unwrap();
        assert_eq!(band.x, 2..8);
        assert_eq!(band.y, 2..5);
        assert!(band.contains(2, 4));
        assert!(!band.contains(8, 4));
    }

    #[test]
    fn test_window_too_large() {
        let raster = Raster::new(10, 4).unwrap();
        assert_eq!(
            Window::new(5).unwrap().check_fits(&raster).unwrap_err(),
            Error::InvalidDimensions {
                window: 5,
                width: 10,
                height: 4
            }
        );
    }

    #[test]
    fn test_window_equal_to_image() {
        let raster = Raster::new(5, 5).unwrap();
        let band = Window::new(5).unwrap().valid_band(&raster).unwrap();
        assert_eq!(band.x, 2..3);
        assert_eq!(band.y, 2..3);
    }
}
