//! Image processing for rendered barcodes.
//!
//! Provides nearest-neighbour scaling of symbol bitmaps, Floyd-Steinberg
//! quantization to a black/white palette, caption compositing below 1D
//! symbols, and PNG serialization of the results.

pub mod compose;
pub mod dither;
pub mod encode;
pub mod resize;
pub mod text;

// Re-exports for convenience
pub use dither::{MonochromeImage, floyd_steinberg_dither};
pub use encode::{encode_gray_png, encode_monochrome_png};
pub use resize::{Scaling, scale_symbol};
pub use text::add_label;

/// Largest accepted target width or height in pixels.
pub const MAX_DIMENSION: u32 = 10_000;

/// Height of the white band appended below labeled symbols.
pub const LABEL_BAND_HEIGHT: u32 = 20;

/// Errors that can occur while processing a rendered symbol.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("target size {width}x{height} exceeds the {max}px limit")]
    DimensionTooLarge { width: u32, height: u32, max: u32 },

    #[error("can not scale barcode to an image smaller than {min_width}x{min_height}")]
    SymbolTooLarge { min_width: usize, min_height: usize },

    #[error("PNG encode error: {0}")]
    Serialization(String),
}

impl ProcessError {
    /// Whether the error came from the scaling stage.
    pub fn is_scale_error(&self) -> bool {
        !matches!(self, Self::Serialization(_))
    }
}

/// Result type alias for image processing operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
