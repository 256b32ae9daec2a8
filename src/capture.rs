//! The rasterization capability behind visual-fidelity exports.

use crate::error::CaptureError;
use image::imageops::{self, FilterType};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use vitae_types::RasterImage;

pub type CaptureFuture<'a> = Pin<Box<dyn Future<Output = Result<RasterImage, CaptureError>> + Send + 'a>>;

/// Turns a rendered surface into a bitmap.
///
/// An implementation is bound to the surface it captures. Completion is
/// all-or-nothing: either a complete image or an error.
pub trait SnapshotCapture: Send + Sync {
    /// Captures the surface at `scale` times its natural pixel size.
    fn capture(&self, scale: f32) -> CaptureFuture<'_>;
}

/// A surface that was already rendered to a PNG or JPEG preview on disk.
#[derive(Debug, Clone)]
pub struct ImageFileSurface {
    path: PathBuf,
}

impl ImageFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotCapture for ImageFileSurface {
    fn capture(&self, scale: f32) -> CaptureFuture<'_> {
        let path = self.path.clone();
        Box::pin(async move {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(CaptureError::Failed(format!("invalid capture scale {scale}")));
            }
            tokio::task::spawn_blocking(move || decode_scaled(&path, scale))
                .await
                .map_err(|e| CaptureError::Failed(format!("capture task did not complete: {e}")))?
        })
    }
}

fn decode_scaled(path: &Path, scale: f32) -> Result<RasterImage, CaptureError> {
    let decoded = image::open(path)
        .map_err(|e| CaptureError::Failed(format!("could not read '{}': {e}", path.display())))?
        .into_rgba8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(CaptureError::EmptyImage);
    }

    let target_width = ((width as f32 * scale).round() as u32).max(1);
    let target_height = ((height as f32 * scale).round() as u32).max(1);
    let pixels = if (target_width, target_height) == (width, height) {
        decoded
    } else {
        imageops::resize(&decoded, target_width, target_height, FilterType::Triangle)
    };
    log::debug!(
        "Captured '{}' at {}x: {}x{} -> {}x{} px.",
        path.display(),
        scale,
        width,
        height,
        target_width,
        target_height
    );

    RasterImage::new(target_width, target_height, pixels.into_raw()).map_err(|e| CaptureError::Failed(e.to_string()))
}
