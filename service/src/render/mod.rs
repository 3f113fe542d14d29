//! The request-to-image rendering pipeline.

pub mod dispatcher;
pub mod formats;
pub mod params;

pub use dispatcher::{RenderedImage, render};
pub use formats::{FORMATS, Finish, FormatSpec};
pub use params::{RawParams, RenderRequest, resolve};
