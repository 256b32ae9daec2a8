use crate::error::RenderError;
use crate::info::DocumentInfo;
use lopdf::ObjectId;
use std::collections::BTreeMap;
use std::io::{Seek, Write};
use std::sync::Arc;
use vitae_types::{Page, RasterImage, Size};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Call order: `begin_document`, `add_resources`, then per page
/// `render_page_content` followed by `write_page_object`, and `finish` last.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn add_resources(
        &mut self,
        resources: &BTreeMap<String, Arc<RasterImage>>,
    ) -> Result<(), RenderError>;

    fn render_page_content(&mut self, page: &Page, page_size: Size) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}
