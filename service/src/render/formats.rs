//! Static routing table: one entry per served symbology.
//!
//! A new format is added by appending an entry to [`FORMATS`]; the router,
//! the documentation page and the dispatcher all read from this table.

use image_processor::Scaling;
use symbol_encoder::{
    Code128Encoder, DataMatrixEncoder, Ean13Encoder, QrEncoder, SymbolEncoder,
};

/// Post-processing applied after scaling.
///
/// 2D symbols are palette-reduced and 1D symbols are captioned, never both.
/// This mirrors the long-standing output of the service: labeled 1D images
/// are served as plain grayscale PNGs, not palette-reduced ones. Changing it
/// alters the bytes clients receive, so it is kept as an explicit choice
/// rather than harmonized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Floyd-Steinberg to a two-entry palette, 1-bit PNG.
    Quantize,
    /// Caption with the request text below the bars, 8-bit grayscale PNG.
    Label,
}

/// One served format.
pub struct FormatSpec {
    pub path: &'static str,
    pub encoder: &'static dyn SymbolEncoder,
    pub scaling: Scaling,
    pub finish: Finish,
    pub description: &'static str,
    pub example: &'static str,
    /// Whether the `level` parameter reaches the encoder.
    pub uses_level: bool,
}

impl std::fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatSpec")
            .field("path", &self.path)
            .field("encoder", &self.encoder.name())
            .field("scaling", &self.scaling)
            .field("finish", &self.finish)
            .finish()
    }
}

/// Every served format, in documentation order.
pub static FORMATS: [FormatSpec; 4] = [
    FormatSpec {
        path: "/qr",
        encoder: &QrEncoder,
        scaling: Scaling::Square,
        finish: Finish::Quantize,
        description: "QR code",
        example: "/qr?text=Hello",
        uses_level: true,
    },
    FormatSpec {
        path: "/datamatrix",
        encoder: &DataMatrixEncoder,
        scaling: Scaling::Square,
        finish: Finish::Quantize,
        description: "DataMatrix",
        example: "/datamatrix?text=Hello",
        uses_level: false,
    },
    FormatSpec {
        path: "/ean128",
        encoder: &Code128Encoder,
        scaling: Scaling::Stretch,
        finish: Finish::Label,
        description: "Code 128",
        example: "/ean128?text=Hello",
        uses_level: false,
    },
    FormatSpec {
        path: "/ean13",
        encoder: &Ean13Encoder,
        scaling: Scaling::Stretch,
        finish: Finish::Label,
        description: "EAN-13 (12 digits, the 13th check digit is optional and computed when omitted)",
        example: "/ean13?text=123456789012",
        uses_level: false,
    },
];
