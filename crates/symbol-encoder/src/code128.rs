//! Code 128 symbology (served on the `/ean128` route).

use barcoders::sym::code128::Code128;
use tracing::debug;

use crate::{EncodeError, EncodeParams, Result, SymbolBitmap, SymbolEncoder};

/// Marker selecting Code 128 character set B (printable ASCII) in `barcoders`.
const CHARSET_B: char = '\u{0181}';
/// Marker selecting Code 128 character set C (digit pairs) in `barcoders`.
const CHARSET_C: char = '\u{0106}';
/// Shortest digit run worth a switch to set C.
const MIN_SET_C_RUN: usize = 4;

/// Code 128 encoder. Digit runs are packed two per symbol in character set C,
/// everything else goes through character set B.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128Encoder;

impl SymbolEncoder for Code128Encoder {
    fn name(&self) -> &'static str {
        "code128"
    }

    fn encode(&self, text: &str, _params: &EncodeParams) -> Result<SymbolBitmap> {
        if let Some(c) = text.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(EncodeError::InvalidInput(format!(
                "Code128 encode error: unsupported character {c:?}"
            )));
        }

        let data = with_charsets(text);
        let barcode = Code128::new(data)
            .map_err(|e| EncodeError::InvalidInput(format!("Code128 encode error: {e}")))?;
        let bars = barcode.encode();

        debug!(modules = bars.len(), "Code128 symbol encoded");
        SymbolBitmap::from_bars(&bars)
            .ok_or_else(|| EncodeError::Internal("Code128 encoder returned no bars".into()))
    }
}

/// Prefix `text` (printable ASCII only) with the charset markers `barcoders`
/// expects, switching to set C for long digit runs.
fn with_charsets(text: &str) -> String {
    let bytes = text.as_bytes();
    let all_digits_even = bytes.len() % 2 == 0 && bytes.iter().all(u8::is_ascii_digit);

    let mut out = String::with_capacity(text.len() + 4);
    let mut current = None;
    let mut i = 0;
    while i < bytes.len() {
        let run = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
        if run >= MIN_SET_C_RUN || (all_digits_even && run > 0) {
            // Set C takes pairs; an odd leading digit stays in B.
            let lead = run % 2;
            if lead == 1 {
                switch_to(&mut out, &mut current, CHARSET_B);
                out.push_str(&text[i..i + 1]);
            }
            switch_to(&mut out, &mut current, CHARSET_C);
            out.push_str(&text[i + lead..i + run]);
            i += run;
        } else {
            let end = i + run.max(1);
            switch_to(&mut out, &mut current, CHARSET_B);
            out.push_str(&text[i..end]);
            i = end;
        }
    }
    out
}

fn switch_to(out: &mut String, current: &mut Option<char>, charset: char) {
    if *current != Some(charset) {
        out.push(charset);
        *current = Some(charset);
    }
}
