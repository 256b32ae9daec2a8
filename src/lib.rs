//! Dual-mode résumé export.
//!
//! A [`ContentModel`] is exported either as a visual snapshot of its rendered
//! appearance ([`ExportMode::Styled`]) or as paginated plain text that
//! applicant tracking systems can read ([`ExportMode::Ats`]).
//!
//! ```no_run
//! # async fn run() -> Result<(), vitae::ExportError> {
//! use vitae::{ContentModel, DirectoryDelivery, ExportBuilder, ExportMode};
//!
//! let coordinator = ExportBuilder::new().build(DirectoryDelivery::new("out"))?;
//! let path = coordinator.export(&ContentModel::starter(), ExportMode::Ats, None).await?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod capture;
pub mod config;
pub mod coordinator;
pub mod delivery;
pub mod error;
pub mod mode;

pub use builder::ExportBuilder;
pub use capture::{CaptureFuture, ImageFileSurface, SnapshotCapture};
pub use config::ExportConfig;
pub use coordinator::{ExportCoordinator, SNAPSHOT_RESOURCE};
pub use delivery::{DirectoryDelivery, ExportedFile, FileDelivery, MemoryDelivery};
pub use error::{CaptureError, ExportError};
pub use mode::{ExportMode, export_file_name};

pub use vitae_layout::{FlowLayoutEngine, LayoutConfig, MetricsProvider, PageFitter, StandardFontMetrics};
pub use vitae_render_core::EncodingPolicy;
pub use vitae_types::{ContentModel, Document, Education, Experience, Identity, RasterImage};
