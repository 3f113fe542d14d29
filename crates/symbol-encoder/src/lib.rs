//! Symbol encoders for 1D and 2D codes.
//!
//! Each supported symbology turns a text payload into a [`SymbolBitmap`]:
//! a binary raster at the symbol's natural resolution (one pixel per module,
//! no quiet zone). The actual encoding work is delegated to the `qrcode`,
//! `datamatrix` and `barcoders` crates; this crate only adapts their output
//! to a single bitmap type and a single error type.

pub mod bitmap;
pub mod code128;
pub mod data_matrix;
pub mod ean13;
pub mod qr;

pub use bitmap::SymbolBitmap;
pub use code128::Code128Encoder;
pub use data_matrix::DataMatrixEncoder;
pub use ean13::Ean13Encoder;
pub use qr::QrEncoder;

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// ~7% of codewords can be restored.
    L,
    /// ~15% of codewords can be restored.
    #[default]
    M,
    /// ~25% of codewords can be restored.
    Q,
    /// ~30% of codewords can be restored.
    H,
}

impl EcLevel {
    /// Map the numeric `level` request parameter (1-4) to a level.
    ///
    /// Anything outside 1-4 yields the default, [`EcLevel::M`].
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Self::L,
            2 => Self::M,
            3 => Self::Q,
            4 => Self::H,
            _ => Self::M,
        }
    }
}

/// Format-specific parameters passed to every encoder.
///
/// Encoders ignore the fields that do not apply to their symbology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeParams {
    pub ec_level: EcLevel,
}

/// Errors that can occur while encoding a symbol.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The text cannot be represented in the requested symbology.
    #[error("{0}")]
    InvalidInput(String),

    /// The encoder failed for a reason unrelated to the text content.
    #[error("encoder failure: {0}")]
    Internal(String),
}

impl EncodeError {
    /// Whether the failure was caused by the caller's text.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// A symbology that renders text into a binary raster.
pub trait SymbolEncoder: Send + Sync {
    /// Short human-readable symbology name, used in logs.
    fn name(&self) -> &'static str;

    /// Encode `text` into an unscaled bitmap.
    fn encode(&self, text: &str, params: &EncodeParams) -> Result<SymbolBitmap>;
}
