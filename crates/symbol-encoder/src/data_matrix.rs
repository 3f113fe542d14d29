//! DataMatrix (ECC 200) symbology.

use ::datamatrix::{DataMatrix, SymbolList};
use tracing::debug;

use crate::{EncodeError, EncodeParams, Result, SymbolBitmap, SymbolEncoder};

/// DataMatrix encoder. Picks the smallest square symbol that fits the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataMatrixEncoder;

impl SymbolEncoder for DataMatrixEncoder {
    fn name(&self) -> &'static str {
        "datamatrix"
    }

    fn encode(&self, text: &str, _params: &EncodeParams) -> Result<SymbolBitmap> {
        let symbols = SymbolList::default().enforce_square();
        let code = DataMatrix::encode(text.as_bytes(), symbols)
            .map_err(|e| EncodeError::InvalidInput(format!("DataMatrix encode error: {e:?}")))?;
        let bitmap = code.bitmap();
        let (width, height) = (bitmap.width(), bitmap.height());

        let mut modules = vec![false; width * height];
        for (x, y) in bitmap.pixels() {
            modules[y * width + x] = true;
        }

        debug!(width, height, "DataMatrix symbol encoded");
        SymbolBitmap::from_modules(width, height, modules)
            .ok_or_else(|| EncodeError::Internal("DataMatrix encoder returned an empty symbol".into()))
    }
}
