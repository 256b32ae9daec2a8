use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod algorithms;
pub mod config;
pub mod fit;
pub mod flow;
pub mod text;

pub use self::config::{FontSizes, LayoutConfig, Spacing};
pub use self::fit::{PageFitter, fit, overflows};
pub use self::flow::{Block, BlockKind, BlockPlacement, FlowLayoutEngine};
pub use self::text::{Measured, MetricsProvider, StandardFontMetrics, line_height, wrap_words};

// Geometry shared with the renderers.
pub use vitae_types::{Rect, Size};
