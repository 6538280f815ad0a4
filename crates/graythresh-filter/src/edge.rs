//! Laplacian sharpening
//!
//! Convolution with the 3x3 kernel
//!
//! ```text
//! -1 -1 -1
//! -1  9 -1
//! -1 -1 -1
//! ```
//!
//! i.e. the source plus its 8-neighbor Laplacian. Edges mirror without
//! repeating the edge sample and the result saturates to `[0, 255]`.

use crate::FilterResult;
use graythresh_core::{BorderMode, Raster, RasterMut};
use rayon::prelude::*;

/// Center weight of the sharpening kernel.
const CENTER_WEIGHT: i32 = 9;

/// Sharpen with the 8-neighbor Laplacian kernel.
pub fn laplacian_sharpen(raster: &Raster) -> FilterResult<Raster> {
    let padded = raster.add_border(1, BorderMode::Reflect101)?;
    let w = raster.width() as usize;

    let mut out = RasterMut::new(raster.width(), raster.height())?;
    out.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let above = padded.row(y as u32);
            let here = padded.row(y as u32 + 1);
            let below = padded.row(y as u32 + 2);
            for (x, dst) in row.iter_mut().enumerate() {
                let mut neighbors = 0i32;
                for line in [above, here, below] {
                    neighbors += line[x..x + 3].iter().map(|&v| v as i32).sum::<i32>();
                }
                let center = here[x + 1] as i32;
                neighbors -= center;
                *dst = (CENTER_WEIGHT * center - neighbors).clamp(0, 255) as u8;
            }
        });

    Ok(out.into())
}
