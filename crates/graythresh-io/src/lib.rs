//! graythresh-io - PNG I/O for grayscale rasters
//!
//! The algorithm crates never touch files; this crate is the thin codec
//! layer that the batch driver uses to turn `.png` files into [`Raster`]s
//! and back.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{luminance, read_png, write_png};

use graythresh_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read a raster from a PNG file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    read_png(BufReader::new(file))
}

/// Read a raster from in-memory PNG data.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    read_png(Cursor::new(data))
}

/// Write a raster to a PNG file, replacing any existing file.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_png(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a raster as in-memory PNG data.
pub fn write_image_mem(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(raster, &mut buffer)?;
    Ok(buffer)
}

/// True if `path` has a `.png` extension (case-insensitive).
pub fn is_png_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
