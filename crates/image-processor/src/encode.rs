//! PNG serialization of rendered symbols.

use std::io::Cursor;

use image::{GrayImage, ImageFormat};
use tracing::debug;

use crate::dither::{MonochromeImage, PALETTE};
use crate::{ProcessError, Result};

/// Encode a monochrome image as a 1-bit indexed PNG with a two-entry palette.
pub fn encode_monochrome_png(img: &MonochromeImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut buf = Vec::new();

    let mut encoder = png::Encoder::new(&mut buf, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::One);
    encoder.set_palette(PALETTE.concat());

    let mut writer = encoder.write_header().map_err(serialization)?;
    writer
        .write_image_data(&pack_rows(img))
        .map_err(serialization)?;
    writer.finish().map_err(serialization)?;

    debug!(width, height, bytes = buf.len(), "Encoded monochrome PNG");
    Ok(buf)
}

/// Encode an 8-bit grayscale image as PNG.
pub fn encode_gray_png(img: &GrayImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(serialization)?;

    debug!(
        width = img.width(),
        height = img.height(),
        bytes = buf.len(),
        "Encoded grayscale PNG"
    );
    Ok(buf)
}

/// Pack palette indices into 1-bit rows, most significant bit first.
fn pack_rows(img: &MonochromeImage) -> Vec<u8> {
    let stride = img.width().div_ceil(8) as usize;
    let mut packed = vec![0u8; stride * img.height() as usize];
    for (y, row) in img.rows().enumerate() {
        for (x, &index) in row.iter().enumerate() {
            if index != 0 {
                packed[y * stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    packed
}

fn serialization(e: impl std::fmt::Display) -> ProcessError {
    ProcessError::Serialization(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::floyd_steinberg_dither;
    use image::Luma;

    fn stripes(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| {
            Luma([if x % 3 == 0 { 0 } else { 255 }])
        })
    }

    #[test]
    fn monochrome_png_has_two_entry_palette() {
        let mono = floyd_steinberg_dither(&stripes(13, 5));
        let bytes = encode_monochrome_png(&mono).unwrap();

        let reader = png::Decoder::new(Cursor::new(&bytes)).read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::One);
        assert_eq!(info.palette.as_deref(), Some(&[255, 255, 255, 0, 0, 0][..]));
    }

    #[test]
    fn monochrome_png_round_trips_pixels() {
        let source = stripes(13, 5);
        let bytes = encode_monochrome_png(&floyd_steinberg_dither(&source)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded, source);
    }

    #[test]
    fn gray_png_decodes_to_same_dimensions() {
        let bytes = encode_gray_png(&stripes(20, 7)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 7));
    }

    #[test]
    fn pack_rows_pads_each_row() {
        let mono = floyd_steinberg_dither(&GrayImage::from_pixel(9, 2, Luma([0])));
        let packed = pack_rows(&mono);
        assert_eq!(packed, vec![0xFF, 0x80, 0xFF, 0x80]);
    }
}
