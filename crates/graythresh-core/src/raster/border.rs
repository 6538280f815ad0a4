//! Border operations
//!
//! Padding a raster so that a window centered on any original pixel stays
//! inside the padded image. Used by the algorithms that compute every pixel
//! (median, adaptive mean, Laplacian) rather than only the valid band.

use super::Raster;
use crate::error::Result;

/// How border pixels are synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Every border pixel has the given value
    Constant(u8),
    /// Edge pixels are repeated: `aaa|abcd|ddd`
    Replicate,
    /// Mirror without repeating the edge: `dcb|abcd|cba`
    Reflect101,
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate onto `0..n`.
    ///
    /// Returns `None` for [`BorderMode::Constant`] outside the range.
    #[inline]
    pub fn map_index(self, i: i64, n: u32) -> Option<u32> {
        let n = n as i64;
        if (0..n).contains(&i) {
            return Some(i as u32);
        }
        match self {
            BorderMode::Constant(_) => None,
            BorderMode::Replicate => Some(i.clamp(0, n - 1) as u32),
            BorderMode::Reflect101 => {
                if n == 1 {
                    return Some(0);
                }
                let period = 2 * n - 2;
                let m = i.rem_euclid(period);
                Some(if m >= n { period - m } else { m } as u32)
            }
        }
    }
}

impl Raster {
    /// Add a uniform border of `npix` pixels on all sides.
    ///
    /// Returns a new raster of size `(width + 2*npix, height + 2*npix)`.
    pub fn add_border(&self, npix: u32, mode: BorderMode) -> Result<Raster> {
        let (w, h) = self.dimensions();
        let fill = match mode {
            BorderMode::Constant(v) => v,
            _ => 0,
        };
        Raster::from_fn(w + 2 * npix, h + 2 * npix, |x, y| {
            let sx = mode.map_index(x as i64 - npix as i64, w);
            let sy = mode.map_index(y as i64 - npix as i64, h);
            match (sx, sy) {
                (Some(sx), Some(sy)) => self.get_pixel_unchecked(sx, sy),
                _ => fill,
            }
        })
    }

    /// Remove a uniform border of `npix` pixels from all sides.
    pub fn remove_border(&self, npix: u32) -> Result<Raster> {
        let (w, h) = self.dimensions();
        let nw = w.saturating_sub(2 * npix);
        let nh = h.saturating_sub(2 * npix);
        Raster::from_fn(nw, nh, |x, y| self.get_pixel_unchecked(x + npix, y + npix))
    }
}
