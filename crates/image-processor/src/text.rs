//! Caption rendering below 1D symbols.
//!
//! Text is drawn with the fixed-width 8x8 `font8x8` basic set, so layout is a
//! pure function of the character count and the output is reproducible.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{GrayImage, Luma};
use tracing::debug;

use crate::LABEL_BAND_HEIGHT;
use crate::compose::extend_below;

/// Horizontal advance of every glyph.
pub const GLYPH_WIDTH: u32 = 8;

/// Baseline distance from the top of the label band.
pub const BASELINE_OFFSET: u32 = 15;

/// Glyph row sitting on the baseline; rows below it hold descenders.
const BASELINE_ROW: i64 = 6;

const TEXT_COLOR: Luma<u8> = Luma([0]);

/// Measure the pixel width of a string.
pub fn measure_text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH
}

/// Draw `text` with its baseline at `baseline`, starting at `x`.
///
/// Pixels falling outside the image are clipped. Characters without a glyph
/// advance the pen without drawing.
pub fn draw_text(img: &mut GrayImage, x: i64, baseline: i64, text: &str, color: Luma<u8>) {
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));
    let top = baseline - BASELINE_ROW;

    for (n, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin = x + n as i64 * i64::from(GLYPH_WIDTH);
        for (row, bits) in glyph.iter().enumerate() {
            let py = top + row as i64;
            if py < 0 || py >= height {
                continue;
            }
            for col in 0..GLYPH_WIDTH {
                let px = origin + i64::from(col);
                if bits & (1u8 << col) != 0 && px >= 0 && px < width {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// Append a white band below `img` and draw `text` centered in it.
///
/// The band is [`LABEL_BAND_HEIGHT`] pixels tall and the baseline sits
/// [`BASELINE_OFFSET`] pixels below the original image.
pub fn add_label(img: &GrayImage, text: &str) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut labeled = extend_below(img, LABEL_BAND_HEIGHT);

    let text_width = i64::from(measure_text_width(text));
    let x = (i64::from(width) - text_width) / 2;
    let baseline = i64::from(height + BASELINE_OFFSET);
    debug!(width, height, text_width, x, "Drawing label");

    draw_text(&mut labeled, x, baseline, text, TEXT_COLOR);
    labeled
}
