//! PNG image format support
//!
//! Decoding always produces a single 8-bit channel: low bit-depth and
//! palette images are expanded to 8 bits, 16-bit samples keep their high
//! byte, alpha is dropped and color is reduced to luminance. Encoding always
//! writes 8-bit grayscale.

use crate::{IoError, IoResult};
use graythresh_core::Raster;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// ITU-R BT.601 luma of an RGB triple, rounded to the nearest level.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    log::trace!(
        "png: {}x{} {:?} {:?}",
        width,
        height,
        info.color_type,
        info.bit_depth
    );

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected decoded bit depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut out = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        match samples {
            1 => out.extend_from_slice(row),
            2 => out.extend(row.chunks_exact(2).map(|ga| ga[0])),
            _ => out.extend(
                row.chunks_exact(samples)
                    .map(|px| luminance(px[0], px[1], px[2])),
            ),
        }
    }

    Ok(Raster::from_vec(width, height, out)?)
}

/// Write a PNG image as 8-bit grayscale
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buffer
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let raster = Raster::from_fn(10, 10, |x, y| ((x + y) * 10) as u8).unwrap();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let raster2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(raster2, raster);
    }

    #[test]
    fn test_read_rgb_reduced_to_luminance() {
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 10, 10];
        let png = encode_raw(4, 1, ColorType::Rgb, BitDepth::Eight, &data);
        let raster = read_png(Cursor::new(png)).unwrap();
        assert_eq!(raster.data(), &[76, 150, 29, 10]);
    }

    #[test]
    fn test_read_gray_alpha_drops_alpha() {
        let data = [12, 255, 200, 0];
        let png = encode_raw(2, 1, ColorType::GrayscaleAlpha, BitDepth::Eight, &data);
        let raster = read_png(Cursor::new(png)).unwrap();
        assert_eq!(raster.data(), &[12, 200]);
    }

    #[test]
    fn test_read_16bit_keeps_high_byte() {
        let data = [0x12, 0x34, 0xAB, 0xCD];
        let png = encode_raw(2, 1, ColorType::Grayscale, BitDepth::Sixteen, &data);
        let raster = read_png(Cursor::new(png)).unwrap();
        assert_eq!(raster.data(), &[0x12, 0xAB]);
    }

    #[test]
    fn test_read_1bit_expanded() {
        // 0b1010_0000: pixels 1, 0, 1, 0
        let data = [0b1010_0000];
        let png = encode_raw(4, 1, ColorType::Grayscale, BitDepth::One, &data);
        let raster = read_png(Cursor::new(png)).unwrap();
        assert_eq!(raster.data(), &[255, 0, 255, 0]);
    }

    #[test]
    fn test_read_garbage_fails() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(100, 100, 100), 100);
    }
}
