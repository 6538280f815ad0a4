//! Pixel access functions
//!
//! Checked and unchecked getters/setters for individual samples. Samples
//! are stored one byte per pixel in row-major order, so the index of
//! `(x, y)` is `y * width + x`.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

impl Raster {
    /// Get a sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[index(self.width(), x, y)]
    }
}

impl RasterMut {
    /// Get a sample at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a sample without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[index(self.width(), x, y)]
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the sample buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds() {
        let raster = Raster::new(3, 2).unwrap();
        assert_eq!(raster.get_pixel(2, 1), Some(0));
        assert_eq!(raster.get_pixel(3, 0), None);
        assert_eq!(raster.get_pixel(0, 2), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut m = RasterMut::new(3, 2).unwrap();
        m.set_pixel(1, 1, 42).unwrap();
        assert_eq!(m.get_pixel(1, 1), Some(42));
        let raster: Raster = m.into();
        assert_eq!(raster.data(), &[0, 0, 0, 0, 42, 0]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut m = RasterMut::new(3, 2).unwrap();
        assert_eq!(
            m.set_pixel(3, 0, 1).unwrap_err(),
            Error::IndexOutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            }
        );
    }
}
