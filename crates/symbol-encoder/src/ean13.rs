//! EAN-13 symbology.
//!
//! Accepts 12 data digits, or 13 digits whose last one is the check digit.
//! When the check digit is omitted it is computed.

use barcoders::sym::ean13::EAN13;
use tracing::debug;

use crate::{EncodeError, EncodeParams, Result, SymbolBitmap, SymbolEncoder};

const DATA_DIGITS: usize = 12;

/// EAN-13 encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ean13Encoder;

impl SymbolEncoder for Ean13Encoder {
    fn name(&self) -> &'static str {
        "ean13"
    }

    fn encode(&self, text: &str, _params: &EncodeParams) -> Result<SymbolBitmap> {
        let data = normalize_digits(text)?;
        let barcode = EAN13::new(data.to_string())
            .map_err(|e| EncodeError::Internal(format!("EAN-13 encode error: {e}")))?;
        let bars = barcode.encode();

        debug!(modules = bars.len(), "EAN-13 symbol encoded");
        SymbolBitmap::from_bars(&bars)
            .ok_or_else(|| EncodeError::Internal("EAN-13 encoder returned no bars".into()))
    }
}

/// Validate `text` and return the 12 data digits.
fn normalize_digits(text: &str) -> Result<&str> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodeError::InvalidInput(
            "EAN-13 accepts digits only".to_string(),
        ));
    }

    match text.len() {
        DATA_DIGITS => Ok(text),
        13 => {
            let (data, check) = text.split_at(DATA_DIGITS);
            let expected = check_digit(data);
            let given = check.as_bytes()[0] - b'0';
            if given != expected {
                return Err(EncodeError::InvalidInput(format!(
                    "EAN-13 check digit mismatch: expected {expected}, got {given}"
                )));
            }
            Ok(data)
        }
        n => Err(EncodeError::InvalidInput(format!(
            "EAN-13 requires 12 or 13 digits, got {n}"
        ))),
    }
}

/// Compute the EAN-13 check digit of 12 ASCII data digits.
pub fn check_digit(data: &str) -> u8 {
    let sum: u32 = data
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 { digit } else { digit * 3 }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> Result<SymbolBitmap> {
        Ean13Encoder.encode(text, &EncodeParams::default())
    }

    #[test]
    fn check_digit_known_values() {
        assert_eq!(check_digit("400638133393"), 1);
        assert_eq!(check_digit("590123412345"), 7);
        assert_eq!(check_digit("123456789012"), 8);
    }

    #[test]
    fn twelve_digits_encode_to_95_modules() {
        let bitmap = encode("123456789012").unwrap();
        assert!(bitmap.is_linear());
        assert_eq!(bitmap.width(), 95);
    }

    #[test]
    fn explicit_check_digit_matches_computed() {
        let implicit = encode("590123412345").unwrap();
        let explicit = encode("5901234123457").unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        let err = encode("5901234123450").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(encode("12345678901").unwrap_err().is_client_error());
        assert!(encode("12345678901234").unwrap_err().is_client_error());
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(encode("abc").unwrap_err().is_client_error());
        assert!(encode("12345678901a").unwrap_err().is_client_error());
    }
}
