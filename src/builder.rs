use crate::config::ExportConfig;
use crate::coordinator::ExportCoordinator;
use crate::delivery::FileDelivery;
use crate::error::ExportError;
use vitae_layout::LayoutConfig;
use vitae_render_core::EncodingPolicy;

/// A builder for creating an `ExportCoordinator`.
#[derive(Debug, Clone, Default)]
pub struct ExportBuilder {
    config: ExportConfig,
}

impl ExportBuilder {
    /// Creates a new `ExportBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration at once.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the geometry and typography of content-fidelity exports.
    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    /// Draws a thin rule under each section heading in content-fidelity exports.
    pub fn with_section_rules(mut self, enabled: bool) -> Self {
        self.config.layout.section_rules = enabled;
        self
    }

    pub fn with_capture_scale(mut self, scale: f32) -> Self {
        self.config.capture_scale = scale;
        self
    }

    pub fn with_page_margin(mut self, margin: f32) -> Self {
        self.config.page_margin = margin;
        self
    }

    /// Selects what happens to characters the standard fonts cannot encode.
    pub fn with_encoding_policy(mut self, policy: EncodingPolicy) -> Self {
        self.config.encoding = policy;
        self
    }

    pub fn with_timestamp(mut self, embed: bool) -> Self {
        self.config.embed_timestamp = embed;
        self
    }

    /// Consumes the builder and creates the coordinator, validating the
    /// configuration first.
    pub fn build<D: FileDelivery>(self, delivery: D) -> Result<ExportCoordinator<D>, ExportError> {
        self.config.validate()?;
        log::debug!("Building export coordinator with {:?}", self.config);
        ExportCoordinator::new(self.config, delivery)
    }
}
