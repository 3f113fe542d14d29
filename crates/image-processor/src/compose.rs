//! Canvas composition helpers.

use image::{GrayImage, Luma, imageops};

/// Copy `img` onto a white canvas that is `extra` pixels taller.
///
/// The source lands in the top-left corner unchanged.
pub fn extend_below(img: &GrayImage, extra: u32) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(img.width(), img.height() + extra, Luma([255]));
    imageops::replace(&mut canvas, img, 0, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_below_adds_white_band() {
        let img = GrayImage::from_pixel(10, 5, Luma([0]));
        let result = extend_below(&img, 20);
        assert_eq!(result.dimensions(), (10, 25));
        for x in 0..10 {
            assert_eq!(result.get_pixel(x, 4).0[0], 0);
            assert_eq!(result.get_pixel(x, 5).0[0], 255);
            assert_eq!(result.get_pixel(x, 24).0[0], 255);
        }
    }

    #[test]
    fn extend_below_keeps_source_pixels() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 16 + y) as u8]));
        let result = extend_below(&img, 3);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result.get_pixel(x, y), img.get_pixel(x, y));
            }
        }
    }
}
