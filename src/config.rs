use crate::error::ExportError;
use vitae_layout::LayoutConfig;
use vitae_render_core::EncodingPolicy;

/// Everything an [`ExportCoordinator`](crate::ExportCoordinator) is configured with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Content-fidelity layout. Its `page_size` is also used for snapshots.
    pub layout: LayoutConfig,
    /// Multiplier passed to the capture collaborator.
    pub capture_scale: f32,
    /// Margin around a placed snapshot, in points.
    pub page_margin: f32,
    pub encoding: EncodingPolicy,
    /// Write a `CreationDate` into the document information dictionary.
    /// Turn off for byte-reproducible output.
    pub embed_timestamp: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            capture_scale: 2.0,
            page_margin: 20.0,
            encoding: EncodingPolicy::Strict,
            embed_timestamp: true,
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ExportError> {
        self.layout.validate()?;
        if !(self.capture_scale.is_finite() && self.capture_scale > 0.0) {
            return Err(ExportError::Config(format!(
                "capture scale must be positive, got {}",
                self.capture_scale
            )));
        }
        if !(self.page_margin >= 0.0 && 2.0 * self.page_margin < self.layout.page_size.width) {
            return Err(ExportError::Config(format!(
                "page margin {:.2} leaves no room on a {:.2}pt wide page",
                self.page_margin, self.layout.page_size.width
            )));
        }
        Ok(())
    }
}
