//! QR code symbology.

use qrcode::types::QrError;
use qrcode::{Color, QrCode};
use tracing::debug;

use crate::{EcLevel, EncodeError, EncodeParams, Result, SymbolBitmap, SymbolEncoder};

/// QR encoder. The encoding mode (numeric, alphanumeric, byte) is chosen
/// automatically from the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl SymbolEncoder for QrEncoder {
    fn name(&self) -> &'static str {
        "qr"
    }

    fn encode(&self, text: &str, params: &EncodeParams) -> Result<SymbolBitmap> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), qr_level(params.ec_level))
            .map_err(map_qr_error)?;
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        debug!(size, level = ?params.ec_level, "QR symbol encoded");
        SymbolBitmap::from_modules(size, size, modules)
            .ok_or_else(|| EncodeError::Internal("QR encoder returned an empty symbol".into()))
    }
}

fn qr_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::L => qrcode::EcLevel::L,
        EcLevel::M => qrcode::EcLevel::M,
        EcLevel::Q => qrcode::EcLevel::Q,
        EcLevel::H => qrcode::EcLevel::H,
    }
}

fn map_qr_error(e: QrError) -> EncodeError {
    match e {
        QrError::DataTooLong | QrError::InvalidCharacter | QrError::UnsupportedCharacterSet => {
            EncodeError::InvalidInput(format!("QR encode error: {e}"))
        }
        other => EncodeError::Internal(format!("QR encode error: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str, ec_level: EcLevel) -> Result<SymbolBitmap> {
        QrEncoder.encode(text, &EncodeParams { ec_level })
    }

    #[test]
    fn encode_produces_square_symbol() {
        let bitmap = encode("https://example.com", EcLevel::M).unwrap();
        assert!(bitmap.width() >= 21);
        assert_eq!(bitmap.width(), bitmap.height());
    }

    #[test]
    fn encode_matches_qrcode_modules() {
        let bitmap = encode("Hello", EcLevel::Q).unwrap();
        let reference = QrCode::with_error_correction_level(b"Hello", qrcode::EcLevel::Q).unwrap();
        let colors = reference.to_colors();
        let size = reference.width();
        assert_eq!(bitmap.width(), size);
        for y in 0..size {
            for x in 0..size {
                assert_eq!(bitmap.is_dark(x, y), colors[y * size + x] == Color::Dark);
            }
        }
    }

    #[test]
    fn finder_pattern_corner_is_dark() {
        let bitmap = encode("test", EcLevel::L).unwrap();
        assert!(bitmap.is_dark(0, 0));
        assert!(bitmap.is_dark(bitmap.width() - 1, 0));
        assert!(bitmap.is_dark(0, bitmap.height() - 1));
    }

    #[test]
    fn higher_level_never_shrinks_symbol() {
        let text = "The quick brown fox jumps over the lazy dog";
        let low = encode(text, EcLevel::L).unwrap();
        let high = encode(text, EcLevel::H).unwrap();
        assert!(high.width() >= low.width());
    }

    #[test]
    fn oversized_text_is_invalid_input() {
        let text = "x".repeat(4000);
        let err = encode(&text, EcLevel::H).unwrap_err();
        assert!(err.is_client_error());
    }
}
