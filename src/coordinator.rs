//! One export call, from content model to delivered PDF.

use crate::capture::SnapshotCapture;
use crate::config::ExportConfig;
use crate::delivery::{ExportedFile, FileDelivery};
use crate::error::{CaptureError, ExportError};
use crate::mode::{ExportMode, export_file_name};
use chrono::Utc;
use std::sync::Arc;
use vitae_layout::{FlowLayoutEngine, PageFitter, StandardFontMetrics};
use vitae_render_core::encoding::win_ansi_byte;
use vitae_render_core::utils::pdf_date;
use vitae_render_core::{DocumentInfo, EncodingPolicy};
use vitae_render_lopdf::render_document;
use vitae_types::{ContentModel, Document, Page, PlacedInstruction, RasterImage, Size};

/// Resource key of the captured snapshot in a styled document.
pub const SNAPSHOT_RESOURCE: &str = "snapshot";
const PRODUCER: &str = "vitae";

/// Runs exports against immutable configuration; one coordinator can serve
/// any number of concurrent calls.
pub struct ExportCoordinator<D: FileDelivery> {
    config: ExportConfig,
    flow: FlowLayoutEngine<StandardFontMetrics>,
    fitter: PageFitter,
    delivery: D,
}

impl<D: FileDelivery> ExportCoordinator<D> {
    pub(crate) fn new(config: ExportConfig, delivery: D) -> Result<Self, ExportError> {
        let flow = FlowLayoutEngine::new(config.layout, StandardFontMetrics)?;
        let fitter = PageFitter::new(config.layout.page_size, config.page_margin);
        Ok(Self {
            config,
            flow,
            fitter,
            delivery,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// The content-fidelity document for `model`, without serializing it.
    pub fn layout(&self, model: &ContentModel) -> Document {
        self.flow.layout(model)
    }

    /// Exports `model` in `mode` and hands the PDF to the delivery collaborator.
    ///
    /// `capture` is required for [`ExportMode::Styled`] and ignored for
    /// [`ExportMode::Ats`]. On error nothing is delivered.
    pub async fn export(
        &self,
        model: &ContentModel,
        mode: ExportMode,
        capture: Option<&dyn SnapshotCapture>,
    ) -> Result<D::Handle, ExportError> {
        log::info!("Starting {} export for '{}'.", mode, model.identity.name);

        let document = match mode {
            ExportMode::Styled => {
                let surface = capture.ok_or(CaptureError::MissingSurface)?;
                let snapshot = surface.capture(self.config.capture_scale).await?;
                self.snapshot_document(snapshot)
            }
            ExportMode::Ats => {
                if capture.is_some() {
                    log::debug!("Content-fidelity export ignores the supplied capture handle.");
                }
                self.flow.layout(model)
            }
        };

        let bytes = self.serialize(&document, model)?;
        let file = ExportedFile {
            file_name: export_file_name(&model.identity.name, mode),
            bytes,
            page_count: document.page_count(),
            mode,
        };
        log::info!(
            "Assembled {} ({} page(s), {} bytes).",
            file.file_name,
            file.page_count,
            file.bytes.len()
        );
        self.delivery.deliver(file)
    }

    /// Like [`export`](Self::export), reading the model from JSON first.
    pub async fn export_json(
        &self,
        json: &str,
        mode: ExportMode,
        capture: Option<&dyn SnapshotCapture>,
    ) -> Result<D::Handle, ExportError> {
        let model = ContentModel::from_json_str(json)?;
        self.export(&model, mode, capture).await
    }

    /// A single page holding the snapshot, fitted to the page width.
    pub fn snapshot_document(&self, snapshot: RasterImage) -> Document {
        let natural = Size::new(snapshot.width() as f32, snapshot.height() as f32);
        let placement = self.fitter.place(natural);
        log::debug!(
            "Placing {}x{} px snapshot at ({:.1}, {:.1}) size {:.1}x{:.1}pt.",
            snapshot.width(),
            snapshot.height(),
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );

        let mut document = Document::new(self.fitter.page);
        document.resources.insert(SNAPSHOT_RESOURCE.to_string(), Arc::new(snapshot));
        let mut page = Page::new();
        page.push(PlacedInstruction::image(
            placement.x,
            placement.y,
            placement.width,
            placement.height,
            SNAPSHOT_RESOURCE,
        ));
        document.pages.push(page);
        document
    }

    fn serialize(&self, document: &Document, model: &ContentModel) -> Result<Vec<u8>, ExportError> {
        if self.config.encoding == EncodingPolicy::Replace {
            let replaced = document
                .texts()
                .flat_map(str::chars)
                .filter(|c| win_ansi_byte(*c).is_none())
                .count();
            if replaced > 0 {
                log::warn!("Replacing {} character(s) the standard fonts cannot encode with '?'.", replaced);
            }
        }

        let info = self.document_info(model);
        Ok(render_document(document, &info, self.config.encoding)?)
    }

    fn document_info(&self, model: &ContentModel) -> DocumentInfo {
        let name = model.identity.name.trim();
        DocumentInfo {
            title: (!name.is_empty()).then(|| name.to_string()),
            producer: Some(PRODUCER.to_string()),
            creation_date: self
                .config
                .embed_timestamp
                .then(|| pdf_date(&Utc::now().format("%Y%m%d%H%M%S").to_string())),
            ..Default::default()
        }
    }
}
