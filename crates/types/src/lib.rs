pub mod document;
pub mod geometry;
pub mod model;
pub mod raster;

pub use document::{Document, Element, ImageElement, Page, PlacedInstruction, RuleElement, TextElement};
pub use geometry::{Rect, Size};
pub use model::{ContentModel, Education, Experience, Identity, ModelError};
pub use raster::{RasterError, RasterImage};
