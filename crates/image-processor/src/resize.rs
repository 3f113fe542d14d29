//! Symbol scaling.
//!
//! Scales a [`SymbolBitmap`] by an integer module size with nearest-neighbour
//! sampling, so every output pixel is pure black or pure white and the symbol
//! stays decodable. Leftover space is filled white with the symbol centered.

use image::{GrayImage, Luma};
use symbol_encoder::SymbolBitmap;
use tracing::debug;

use crate::{MAX_DIMENSION, ProcessError, Result};

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// How a symbol maps onto the requested target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// 2D symbols: rendered into a `width x width` square, the requested
    /// height is ignored, modules stay square.
    Square,
    /// 1D symbols: width and height are applied independently; bars are
    /// stretched vertically to the full height.
    Stretch,
}

impl Scaling {
    /// Output dimensions for the requested size.
    pub fn target_size(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::Square => (width, width),
            Self::Stretch => (width, height),
        }
    }
}

/// Scale a symbol bitmap to the requested pixel size.
pub fn scale_symbol(
    bitmap: &SymbolBitmap,
    width: u32,
    height: u32,
    scaling: Scaling,
) -> Result<GrayImage> {
    let (target_w, target_h) = scaling.target_size(width, height);
    check_target(target_w, target_h)?;

    let (orig_w, orig_h) = (bitmap.width(), bitmap.height());
    let too_small = || ProcessError::SymbolTooLarge {
        min_width: orig_w,
        min_height: match scaling {
            Scaling::Square => orig_h,
            Scaling::Stretch => 1,
        },
    };

    let factor_x = target_w as usize / orig_w;
    if factor_x == 0 {
        return Err(too_small());
    }

    let img = match scaling {
        Scaling::Square => {
            let factor = factor_x.min(target_h as usize / orig_h);
            if factor == 0 {
                return Err(too_small());
            }
            debug!(orig_w, orig_h, target_w, target_h, factor, "Scaling 2D symbol");
            scale_square(bitmap, target_w, target_h, factor)
        }
        Scaling::Stretch => {
            debug!(
                orig_w,
                orig_h,
                target_w,
                target_h,
                factor = factor_x,
                "Scaling 1D symbol"
            );
            scale_stretch(bitmap, target_w, target_h, factor_x)
        }
    };

    Ok(img)
}

fn check_target(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidSize { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ProcessError::DimensionTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

fn scale_square(bitmap: &SymbolBitmap, width: u32, height: u32, factor: usize) -> GrayImage {
    let offset_x = (width as usize - bitmap.width() * factor) / 2;
    let offset_y = (height as usize - bitmap.height() * factor) / 2;

    let mut img = GrayImage::from_pixel(width, height, WHITE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (x, y) = (x as usize, y as usize);
        if x < offset_x || y < offset_y {
            continue;
        }
        if bitmap.is_dark((x - offset_x) / factor, (y - offset_y) / factor) {
            *pixel = BLACK;
        }
    }
    img
}

fn scale_stretch(bitmap: &SymbolBitmap, width: u32, height: u32, factor: usize) -> GrayImage {
    let offset_x = (width as usize - bitmap.width() * factor) / 2;
    let orig_h = bitmap.height();

    let mut img = GrayImage::from_pixel(width, height, WHITE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let x = x as usize;
        if x < offset_x {
            continue;
        }
        let src_y = y as usize * orig_h / height as usize;
        if bitmap.is_dark((x - offset_x) / factor, src_y) {
            *pixel = BLACK;
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 checkerboard: dark at (0,0) and (1,1).
    fn checker() -> SymbolBitmap {
        SymbolBitmap::from_modules(2, 2, vec![true, false, false, true]).unwrap()
    }

    fn bars() -> SymbolBitmap {
        SymbolBitmap::from_bars(&[1, 0, 1, 1, 0]).unwrap()
    }

    #[test]
    fn test_square_ignores_height() {
        let img = scale_symbol(&checker(), 100, 50, Scaling::Square).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
    }

    #[test]
    fn test_square_exact_multiple_has_no_padding() {
        let img = scale_symbol(&checker(), 8, 8, Scaling::Square).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(3, 3).0[0], 0);
        assert_eq!(img.get_pixel(4, 0).0[0], 255);
        assert_eq!(img.get_pixel(0, 4).0[0], 255);
        assert_eq!(img.get_pixel(7, 7).0[0], 0);
    }

    #[test]
    fn test_square_centers_with_white_padding() {
        // 3x3 diagonal, factor = 3, symbol occupies 9px centered in 11px -> offset 1
        let diagonal = SymbolBitmap::from_modules(
            3,
            3,
            vec![true, false, false, false, true, false, false, false, true],
        )
        .unwrap();
        let img = scale_symbol(&diagonal, 11, 11, Scaling::Square).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(1, 1).0[0], 0);
        assert_eq!(img.get_pixel(3, 3).0[0], 0);
        assert_eq!(img.get_pixel(4, 1).0[0], 255);
        assert_eq!(img.get_pixel(4, 4).0[0], 0);
        assert_eq!(img.get_pixel(10, 10).0[0], 255);
    }

    #[test]
    fn test_output_is_strictly_binary() {
        let img = scale_symbol(&checker(), 37, 37, Scaling::Square).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_stretch_applies_dimensions_independently() {
        let img = scale_symbol(&bars(), 100, 30, Scaling::Stretch).unwrap();
        assert_eq!(img.dimensions(), (100, 30));
    }

    #[test]
    fn test_stretch_fills_every_row() {
        // factor = 20, no horizontal padding
        let img = scale_symbol(&bars(), 100, 30, Scaling::Stretch).unwrap();
        for y in 0..30 {
            assert_eq!(img.get_pixel(0, y).0[0], 0);
            assert_eq!(img.get_pixel(25, y).0[0], 255);
            assert_eq!(img.get_pixel(45, y).0[0], 0);
            assert_eq!(img.get_pixel(99, y).0[0], 255);
        }
    }

    #[test]
    fn test_stretch_centers_horizontally() {
        // factor = 2, 10px symbol centered in 13px -> offset 1
        let img = scale_symbol(&bars(), 13, 4, Scaling::Stretch).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(1, 0).0[0], 0);
        assert_eq!(img.get_pixel(2, 0).0[0], 0);
        assert_eq!(img.get_pixel(3, 0).0[0], 255);
    }

    #[test]
    fn test_zero_target_is_scale_error() {
        let err = scale_symbol(&bars(), 0, 10, Scaling::Stretch).unwrap_err();
        assert!(matches!(err, ProcessError::InvalidSize { .. }));
        assert!(err.is_scale_error());
        let err = scale_symbol(&bars(), 10, 0, Scaling::Stretch).unwrap_err();
        assert!(matches!(err, ProcessError::InvalidSize { .. }));
    }

    #[test]
    fn test_target_smaller_than_symbol_is_scale_error() {
        let err = scale_symbol(&bars(), 4, 10, Scaling::Stretch).unwrap_err();
        assert!(matches!(err, ProcessError::SymbolTooLarge { .. }));
        let err = scale_symbol(&checker(), 1, 1, Scaling::Square).unwrap_err();
        assert!(matches!(err, ProcessError::SymbolTooLarge { .. }));
    }

    #[test]
    fn test_oversized_target_is_rejected() {
        let err = scale_symbol(&bars(), MAX_DIMENSION + 1, 10, Scaling::Stretch).unwrap_err();
        assert!(matches!(err, ProcessError::DimensionTooLarge { .. }));
    }
}
