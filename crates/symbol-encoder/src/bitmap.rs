//! Unscaled binary raster produced by the encoders.

/// A two-color raster: every module is either dark or light.
///
/// Stored row-major, one `bool` per module (`true` = dark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBitmap {
    width: usize,
    height: usize,
    modules: Vec<bool>,
}

impl SymbolBitmap {
    /// Build a bitmap from row-major modules.
    ///
    /// Returns `None` if the dimensions are zero or do not match the module count.
    pub fn from_modules(width: usize, height: usize, modules: Vec<bool>) -> Option<Self> {
        if width == 0 || height == 0 || modules.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            modules,
        })
    }

    /// Build a one-row bitmap from a 1D bar pattern (`1` = bar, `0` = space).
    pub fn from_bars(bars: &[u8]) -> Option<Self> {
        let modules = bars.iter().map(|&b| b != 0).collect::<Vec<_>>();
        Self::from_modules(modules.len(), 1, modules)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the module at `(x, y)` is dark. Out-of-range coordinates are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.modules[y * self.width + x]
    }

    /// Whether the symbol is a single row of bars.
    pub fn is_linear(&self) -> bool {
        self.height == 1
    }
}
