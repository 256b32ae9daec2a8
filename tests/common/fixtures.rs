use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vitae::{
    CaptureError, CaptureFuture, ContentModel, Education, Experience, RasterImage, SnapshotCapture,
};

/// The starter model with a different name.
pub fn model_named(name: &str) -> ContentModel {
    let mut model = ContentModel::starter();
    model.identity.name = name.to_string();
    model
}

/// `entries` experience entries with `bullets` bullets each; bullet text is
/// `"Entry {e} bullet {b}"`.
pub fn model_with_experiences(entries: usize, bullets: usize) -> ContentModel {
    let mut model = ContentModel::starter();
    model.experiences = (1..=entries)
        .map(|e| Experience {
            role: format!("Role {e}"),
            company: format!("Company {e}"),
            period: format!("{} - {}", 2000 + e, 2001 + e),
            bullets: (1..=bullets).map(|b| format!("Entry {e} bullet {b}")).collect(),
        })
        .collect();
    model
}

pub fn model_with_education(count: usize) -> ContentModel {
    let mut model = ContentModel::starter();
    model.education = (1..=count)
        .map(|i| Education {
            school: format!("School {i}"),
            degree: "B.Sc.".to_string(),
            year: format!("{}", 1990 + i),
        })
        .collect();
    model
}

/// A surface whose capture always yields the same image.
pub struct FixedSurface {
    pub image: RasterImage,
}

impl FixedSurface {
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            image: RasterImage::solid(width, height, [240, 240, 255, 255]).expect("non-empty image"),
        }
    }
}

impl SnapshotCapture for FixedSurface {
    fn capture(&self, _scale: f32) -> CaptureFuture<'_> {
        Box::pin(async move { Ok(self.image.clone()) })
    }
}

/// A surface that always fails with the given error.
pub struct FailingSurface(pub CaptureError);

impl SnapshotCapture for FailingSurface {
    fn capture(&self, _scale: f32) -> CaptureFuture<'_> {
        Box::pin(async move { Err(self.0.clone()) })
    }
}

/// A surface that takes `delay` before producing a small image.
pub struct SlowSurface(pub Duration);

impl SnapshotCapture for SlowSurface {
    fn capture(&self, _scale: f32) -> CaptureFuture<'_> {
        Box::pin(async move {
            tokio::time::sleep(self.0).await;
            RasterImage::solid(10, 10, [0, 0, 0, 255]).map_err(|e| CaptureError::Failed(e.to_string()))
        })
    }
}

/// Writes an opaque PNG preview into `dir`.
pub fn write_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("preview.png");
    RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 255]))
        .save(&path)
        .expect("write png");
    path
}
