use thiserror::Error;
use vitae_layout::LayoutError;
use vitae_render_core::RenderError;
use vitae_types::ModelError;

/// Why a visual snapshot could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("A styled export needs a rendered surface to capture, but none was supplied")]
    MissingSurface,
    #[error("Snapshot capture failed: {0}")]
    Failed(String),
    #[error("Snapshot capture timed out")]
    TimedOut,
    #[error("Snapshot capture produced an empty image")]
    EmptyImage,
}

/// The error taxonomy of one export call. No variant leaves a file behind.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Could not encode the document: {0}")]
    Encoding(String),

    #[error("Content model is invalid: {0}")]
    InvalidModel(String),

    #[error("Could not deliver the exported file: {0}")]
    Delivery(#[source] std::io::Error),

    #[error("Export is misconfigured: {0}")]
    Config(String),
}

impl From<RenderError> for ExportError {
    fn from(e: RenderError) -> Self {
        // Assembly happens in memory, so every render failure is a
        // serialization failure.
        ExportError::Encoding(e.to_string())
    }
}

impl From<ModelError> for ExportError {
    fn from(e: ModelError) -> Self {
        ExportError::InvalidModel(e.to_string())
    }
}

impl From<LayoutError> for ExportError {
    fn from(e: LayoutError) -> Self {
        ExportError::Config(e.to_string())
    }
}
