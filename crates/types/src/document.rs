//! The laid-out document: pages of placed drawing instructions.
//!
//! Coordinates are PDF points measured from the top-left corner of the page.
//! For text, `y` is the baseline.

use crate::geometry::Size;
use crate::raster::RasterImage;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub width: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub width: f32,
    pub height: f32,
    /// Key into `Document::resources`.
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Rule(RuleElement),
    Image(ImageElement),
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Rule(_) => "rule",
            Element::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedInstruction {
    pub x: f32,
    pub y: f32,
    pub element: Element,
}

impl PlacedInstruction {
    pub fn text(x: f32, y: f32, content: impl Into<String>, font_size: f32) -> Self {
        Self {
            x,
            y,
            element: Element::Text(TextElement {
                content: content.into(),
                font_size,
            }),
        }
    }

    pub fn rule(x: f32, y: f32, width: f32, thickness: f32) -> Self {
        Self {
            x,
            y,
            element: Element::Rule(RuleElement { width, thickness }),
        }
    }

    pub fn image(x: f32, y: f32, width: f32, height: f32, resource: impl Into<String>) -> Self {
        Self {
            x,
            y,
            element: Element::Image(ImageElement {
                width,
                height,
                resource: resource.into(),
            }),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.element {
            Element::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub instructions: Vec<PlacedInstruction>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: PlacedInstruction) {
        self.instructions.push(instruction);
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Text content of the page, in placement order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(PlacedInstruction::as_text)
    }
}

/// The output of one export: built, serialized, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub page_size: Size,
    pub pages: Vec<Page>,
    /// Images referenced by `Element::Image` instructions.
    pub resources: BTreeMap<String, Arc<RasterImage>>,
}

impl Document {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
            resources: BTreeMap::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Finds the first page (0-based) holding a text instruction with exactly `content`.
    pub fn page_of_text(&self, content: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.texts().any(|t| t == content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_of_text_finds_first_occurrence() {
        let mut doc = Document::new(Size::a4());
        let mut first = Page::new();
        first.push(PlacedInstruction::text(40.0, 40.0, "Alpha", 11.0));
        let mut second = Page::new();
        second.push(PlacedInstruction::rule(40.0, 60.0, 480.0, 0.5));
        second.push(PlacedInstruction::text(40.0, 40.0, "Beta", 11.0));
        doc.pages.push(first);
        doc.pages.push(second);

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_of_text("Beta"), Some(1));
        assert_eq!(doc.page_of_text("Gamma"), None);
        assert_eq!(doc.texts().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);
        assert_eq!(doc.pages[1].instructions[0].element.kind(), "rule");
    }
}
