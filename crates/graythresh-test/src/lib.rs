//! graythresh-test - Regression test framework for graythresh
//!
//! Provides [`RegParams`], which accumulates check results so one test can
//! report every failing comparison before asserting, and a set of
//! deterministic synthetic rasters that stand in for image fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use graythresh_test::{RegParams, make_uniform};
//!
//! let mut rp = RegParams::new("bernsen");
//! rp.compare_values(100.0, raster.get_pixel(0, 0).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to write checked rasters as PNG files
//!   into `tests/regout/` at the workspace root

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use graythresh_core::Raster;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // graythresh-test is at crates/graythresh-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Raster with every sample equal to `value`
pub fn make_uniform(w: u32, h: u32, value: u8) -> TestResult<Raster> {
    Ok(Raster::new_filled(w, h, value)?)
}

/// Horizontal ramp from 0 at the left edge towards 255 at the right edge
pub fn make_gradient(w: u32, h: u32) -> TestResult<Raster> {
    Ok(Raster::from_fn(w, h, |x, _| {
        ((x as f32 / w as f32) * 255.0) as u8
    })?)
}

/// Checkerboard of `cell`-sized squares alternating between `dark` and `light`
pub fn make_checkerboard(w: u32, h: u32, cell: u32, dark: u8, light: u8) -> TestResult<Raster> {
    Ok(Raster::from_fn(w, h, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            dark
        } else {
            light
        }
    })?)
}

/// Left half `dark`, right half `light`
pub fn make_step(w: u32, h: u32, dark: u8, light: u8) -> TestResult<Raster> {
    Ok(Raster::from_fn(w, h, |x, _| if x < w / 2 { dark } else { light })?)
}

/// Deterministic pseudo-random samples
///
/// 32-bit linear congruential generator; the same seed gives the same
/// raster.
pub fn make_noise(w: u32, h: u32, seed: u32) -> TestResult<Raster> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    Ok(Raster::from_fn(w, h, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    })?)
}

/// Samples drawn from two intensity levels, interleaved pixel by pixel
///
/// Even row-major indices are `dark` and odd ones `light` until one class
/// runs out; the rest is filled with the other. `w` must divide the total.
pub fn make_two_level(w: u32, dark: u8, count_dark: u32, light: u8, count_light: u32) -> TestResult<Raster> {
    let total = count_dark + count_light;
    let h = total.div_ceil(w);
    if w * h != total {
        return Err(TestError::Build(graythresh_core::Error::InvalidParameter(
            format!("{total} samples do not fill rows of width {w}"),
        )));
    }
    let mut remaining_dark = count_dark;
    let mut remaining_light = count_light;
    let mut data = Vec::with_capacity(total as usize);
    for i in 0..total {
        let take_dark = if remaining_light == 0 {
            true
        } else if remaining_dark == 0 {
            false
        } else {
            i % 2 == 0
        };
        if take_dark {
            remaining_dark -= 1;
            data.push(dark);
        } else {
            remaining_light -= 1;
            data.push(light);
        }
    }
    Ok(Raster::from_vec(w, h, data)?)
}
