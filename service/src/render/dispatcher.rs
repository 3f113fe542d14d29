//! Format dispatch: runs the fixed pipeline for one format.
//!
//! Encode -> scale -> quantize or label -> PNG. Everything happens in memory;
//! the first failing stage aborts the render.

use image_processor::{
    add_label, encode_gray_png, encode_monochrome_png, floyd_steinberg_dither, scale_symbol,
};
use symbol_encoder::{EcLevel, EncodeParams};
use tracing::debug;

use super::formats::{Finish, FormatSpec};
use super::params::RenderRequest;
use crate::error::RenderError;

/// A fully encoded PNG ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render `request` with the pipeline of `spec`.
pub fn render(spec: &FormatSpec, request: &RenderRequest) -> Result<RenderedImage, RenderError> {
    let params = EncodeParams {
        ec_level: if spec.uses_level {
            request.ec_level
        } else {
            EcLevel::default()
        },
    };
    let bitmap = spec.encoder.encode(&request.text, &params)?;
    debug!(
        format = spec.encoder.name(),
        modules_w = bitmap.width(),
        modules_h = bitmap.height(),
        "Symbol encoded"
    );

    let scaled = scale_symbol(&bitmap, request.width, request.height, spec.scaling)?;

    let (png, width, height) = match spec.finish {
        Finish::Quantize => {
            let mono = floyd_steinberg_dither(&scaled);
            let (w, h) = mono.dimensions();
            (encode_monochrome_png(&mono)?, w, h)
        }
        Finish::Label => {
            let labeled = add_label(&scaled, &request.text);
            let (w, h) = labeled.dimensions();
            (encode_gray_png(&labeled)?, w, h)
        }
    };

    debug!(
        format = spec.encoder.name(),
        width,
        height,
        bytes = png.len(),
        "Render complete"
    );
    Ok(RenderedImage { png, width, height })
}
