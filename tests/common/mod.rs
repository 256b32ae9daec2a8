#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use vitae::{
    ContentModel, ExportBuilder, ExportCoordinator, ExportError, ExportMode, MemoryDelivery,
    SnapshotCapture,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A coordinator that keeps results in memory and never embeds a timestamp.
pub fn memory_coordinator() -> ExportCoordinator<MemoryDelivery> {
    ExportBuilder::new()
        .with_timestamp(false)
        .build(MemoryDelivery::new())
        .expect("default configuration is valid")
}

/// Runs one export on a fresh runtime and loads the result.
pub fn export_with(
    coordinator: &ExportCoordinator<MemoryDelivery>,
    model: &ContentModel,
    mode: ExportMode,
    capture: Option<&dyn SnapshotCapture>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let file = tokio::runtime::Runtime::new()?.block_on(coordinator.export(model, mode, capture))?;
    GeneratedPdf::from_bytes(file.bytes)
}

pub fn export_ats(model: &ContentModel) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    export_with(&memory_coordinator(), model, ExportMode::Ats, None)
}

pub fn export_styled(
    model: &ContentModel,
    capture: &dyn SnapshotCapture,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    export_with(&memory_coordinator(), model, ExportMode::Styled, Some(capture))
}

/// Runs an export expected to fail and returns its error.
pub fn export_error(
    coordinator: &ExportCoordinator<MemoryDelivery>,
    model: &ContentModel,
    mode: ExportMode,
    capture: Option<&dyn SnapshotCapture>,
) -> ExportError {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    match runtime.block_on(coordinator.export(model, mode, capture)) {
        Ok(file) => panic!("export unexpectedly produced {}", file.file_name),
        Err(e) => e,
    }
}
