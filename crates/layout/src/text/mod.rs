pub mod metrics;
pub mod wrapper;

pub use metrics::{line_height, Measured, MetricsProvider, StandardFontMetrics};
pub use wrapper::wrap_words;
