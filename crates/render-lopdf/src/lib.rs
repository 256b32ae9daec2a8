//! PDF renderer using lopdf.
//!
//! Pages are streamed to the output as they are rendered; only the small
//! trailing structures (page tree, resources, info, catalog) are buffered.

mod helpers;
mod image;
mod renderer;
mod writer;

pub use helpers::*;
pub use image::{ImageXObject, build_image_xobject};
pub use renderer::{LopdfRenderer, render_document};
pub use writer::StreamingPdfWriter;
