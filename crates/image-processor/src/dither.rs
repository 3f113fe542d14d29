//! Floyd-Steinberg quantization to a two-entry black/white palette.

use image::{GrayImage, Luma};
use tracing::debug;

/// Binarization threshold: values at or above become white.
const THRESHOLD: i16 = 128;

/// Palette entries as RGB triples: index 0 = white, index 1 = black.
pub const PALETTE: [[u8; 3]; 2] = [[255, 255, 255], [0, 0, 0]];

/// An image restricted to the two-entry [`PALETTE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeImage {
    width: u32,
    height: u32,
    /// Row-major palette indices, `0` or `1`.
    indices: Vec<u8>,
}

impl MonochromeImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Palette index at `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }

    pub fn is_black(&self, x: u32, y: u32) -> bool {
        self.index(x, y) == 1
    }

    /// Rows of palette indices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks(self.width.max(1) as usize)
    }

    /// Expand back to 8-bit grayscale.
    pub fn to_gray(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([PALETTE[self.index(x, y) as usize][0]])
        })
    }
}

/// Apply Floyd-Steinberg dithering to a grayscale image.
///
/// Pixels are visited left-to-right, top-to-bottom. Error distribution pattern:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
///
/// Pure black and pure white pixels carry no error, so sharp symbol modules
/// map to themselves.
pub fn floyd_steinberg_dither(img: &GrayImage) -> MonochromeImage {
    let (width, height) = img.dimensions();
    debug!(width, height, "Applying Floyd-Steinberg dithering");

    // Work with i16 buffer to handle error diffusion overflow
    let mut buffer: Vec<i16> = img.pixels().map(|p| i16::from(p.0[0])).collect();
    let mut indices = vec![0u8; buffer.len()];

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) as usize;
            let old_pixel = buffer[i];
            let (new_pixel, index) = if old_pixel >= THRESHOLD {
                (255, 0)
            } else {
                (0, 1)
            };
            indices[i] = index;

            distribute_error(&mut buffer, x, y, width, height, old_pixel - new_pixel);
        }
    }

    MonochromeImage {
        width,
        height,
        indices,
    }
}

/// Distribute quantization error to neighboring pixels.
fn distribute_error(buffer: &mut [i16], x: u32, y: u32, width: u32, height: u32, error: i16) {
    if error == 0 {
        return;
    }
    let at = |dx: u32, dy: u32| ((y + dy) * width + dx) as usize;

    // Right: 7/16
    if x + 1 < width {
        buffer[at(x + 1, 0)] += error * 7 / 16;
    }
    // Bottom-left: 3/16
    if x > 0 && y + 1 < height {
        buffer[at(x - 1, 1)] += error * 3 / 16;
    }
    // Bottom: 5/16
    if y + 1 < height {
        buffer[at(x, 1)] += error * 5 / 16;
    }
    // Bottom-right: 1/16
    if x + 1 < width && y + 1 < height {
        buffer[at(x + 1, 1)] += error / 16;
    }
}
