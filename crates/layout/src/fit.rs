//! Placement of one rasterized snapshot onto one page.

use vitae_types::{Rect, Size};

/// Scales `image` to the full page width minus `margin` on each side, keeping
/// its aspect ratio, and anchors it at `(margin, margin)`.
///
/// A placement taller than the page is returned as is: a snapshot is one
/// contiguous surface and is never split across pages. See [`overflows`].
pub fn fit(image: Size, page: Size, margin: f32) -> Rect {
    let width = page.width - 2.0 * margin;
    let height = if image.width > 0.0 {
        image.height * width / image.width
    } else {
        0.0
    };
    Rect::new(margin, margin, width, height)
}

/// Whether a placement runs past the bottom of the page.
pub fn overflows(placement: Rect, page: Size) -> bool {
    placement.bottom() > page.height
}

/// Fits snapshots with a fixed margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFitter {
    pub page: Size,
    pub margin: f32,
}

impl Default for PageFitter {
    fn default() -> Self {
        Self {
            page: Size::a4(),
            margin: 20.0,
        }
    }
}

impl PageFitter {
    pub fn new(page: Size, margin: f32) -> Self {
        Self { page, margin }
    }

    pub fn place(&self, image: Size) -> Rect {
        let placement = fit(image, self.page, self.margin);
        if overflows(placement, self.page) {
            log::warn!(
                "Snapshot placed at {:.1}pt tall overflows the {:.1}pt page; it is not split.",
                placement.height,
                self.page.height
            );
        }
        placement
    }
}
