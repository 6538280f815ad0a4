//! Raster - The grayscale image container
//!
//! A `Raster` is a row-major grid of 8-bit intensity samples. Every
//! algorithm in the workspace reads one and returns a fresh one of the same
//! dimensions.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership) and is never
//! mutated once shared. To write samples, convert to `RasterMut` via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then freeze it back with
//! `Into<Raster>`.

mod access;
mod border;
pub mod statistics;

pub use border::BorderMode;
pub use statistics::SampleRange;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major samples, `width * height` long
    data: Vec<u8>,
}

/// Raster - immutable 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use graythresh_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new raster with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self::from_data(RasterData {
            width,
            height,
            data: vec![value; len],
        }))
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::DataLengthMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(RasterData {
            width,
            height,
            data,
        }))
    }

    /// Build a raster by evaluating `f(x, y)` at every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self::from_data(RasterData {
            width,
            height,
            data,
        }))
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok((width as usize) * (height as usize))
    }

    fn from_data(data: RasterData) -> Self {
        Raster {
            inner: Arc::new(data),
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false: a raster has at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two rasters have the same dimensions.
    #[inline]
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Try to get mutable access without copying.
    ///
    /// Succeeds only when this is the sole reference to the data; otherwise
    /// the raster is handed back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Consume the raster and return its sample buffer.
    ///
    /// Copies only when the data is shared.
    pub fn into_vec(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }

    /// Build a same-size raster by mapping every sample through `f`.
    pub fn map<F>(&self, f: F) -> Raster
    where
        F: Fn(u8) -> u8,
    {
        Self::from_data(RasterData {
            width: self.inner.width,
            height: self.inner.height,
            data: self.inner.data.iter().map(|&v| f(v)).collect(),
        })
    }
}

/// Mutable raster
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a zero-filled mutable raster.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a mutable raster with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Raster::checked_len(width, height)?;
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                data: vec![value; len],
            },
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster::from_data(raster_mut.inner)
    }
}
