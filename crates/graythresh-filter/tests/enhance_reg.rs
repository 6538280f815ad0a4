//! Point transform and sharpening regression test
//!
//! Tests logarithmic compression, linear contrast stretch and Laplacian
//! sharpening on synthetic images.

use graythresh_core::Error;
use graythresh_filter::{FilterError, laplacian_sharpen, linear_contrast_stretch, log_transform};
use graythresh_test::{RegParams, make_gradient, make_noise, make_step, make_uniform};

#[test]
fn enhance_reg_stretch() {
    let mut rp = RegParams::new("enhance_stretch");

    let src = make_noise(30, 20, 9).unwrap().map(|v| 60 + v / 4);
    let range = src.sample_range();
    let out = linear_contrast_stretch(&src).expect("stretch");
    rp.compare_values(30.0, out.width() as f64, 0.0);
    rp.compare_values(20.0, out.height() as f64, 0.0);

    // min -> 0, max -> 255
    let mut endpoints_ok = true;
    for (&s, &o) in src.data().iter().zip(out.data()) {
        if (s == range.min && o != 0) || (s == range.max && o != 255) {
            endpoints_ok = false;
        }
    }
    rp.compare_values(1.0, endpoints_ok as u8 as f64, 0.0);
    let out_range = out.sample_range();
    rp.compare_values(0.0, out_range.min as f64, 0.0);
    rp.compare_values(255.0, out_range.max as f64, 0.0);
    rp.write_raster(&out).unwrap();

    // already full range: unchanged
    let full = make_step(8, 4, 0, 255).unwrap();
    rp.compare_raster(&full, &linear_contrast_stretch(&full).unwrap());

    // uniform input
    let flat = make_uniform(6, 6, 77).unwrap();
    let degenerate = matches!(
        linear_contrast_stretch(&flat),
        Err(FilterError::Core(Error::DegenerateImage { value: 77 }))
    );
    rp.compare_values(1.0, degenerate as u8 as f64, 0.0);

    assert!(rp.cleanup(), "enhance_stretch regression test failed");
}

#[test]
fn enhance_reg_log() {
    let mut rp = RegParams::new("enhance_log");

    let src = make_gradient(128, 4).unwrap();
    let out = log_transform(&src).expect("log_transform");
    rp.compare_values(0.0, out.get_pixel_unchecked(0, 0) as f64, 0.0);
    rp.compare_values(255.0, out.sample_range().max as f64, 0.0);
    // compression lifts dark samples
    let lifted = src.data().iter().zip(out.data()).all(|(&s, &o)| o >= s);
    rp.compare_values(1.0, lifted as u8 as f64, 0.0);
    rp.write_raster(&out).unwrap();

    let zeros = make_uniform(5, 5, 0).unwrap();
    rp.compare_raster(&zeros, &log_transform(&zeros).unwrap());

    assert!(rp.cleanup(), "enhance_log regression test failed");
}

#[test]
fn enhance_reg_laplacian() {
    let mut rp = RegParams::new("enhance_laplacian");

    let flat = make_uniform(9, 7, 64).unwrap();
    rp.compare_raster(&flat, &laplacian_sharpen(&flat).unwrap());

    // step edge gets overshoot on both sides
    let step = make_step(10, 5, 100, 150).unwrap();
    let out = laplacian_sharpen(&step).unwrap();
    // x=4: 9*100 - (5*100 + 3*150) = -50 -> 0
    rp.compare_values(0.0, out.get_pixel_unchecked(4, 2) as f64, 0.0);
    // x=5: 9*150 - (3*100 + 5*150) = 300 -> 255
    rp.compare_values(255.0, out.get_pixel_unchecked(5, 2) as f64, 0.0);
    rp.compare_values(100.0, out.get_pixel_unchecked(1, 2) as f64, 0.0);
    rp.write_raster(&out).unwrap();

    assert!(rp.cleanup(), "enhance_laplacian regression test failed");
}
