use crate::helpers;
use crate::image::{build_image_xobject, link_soft_mask};
use crate::writer::StreamingPdfWriter;
use lopdf::{Object, ObjectId, dictionary};
use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};
use std::sync::Arc;
use vitae_render_core::{DocumentInfo, DocumentRenderer, EncodingPolicy, RenderError};
use vitae_types::{Document, Page, RasterImage, Size};

const PDF_VERSION: &str = "1.7";

/// A streaming PDF renderer on top of `lopdf` objects.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    pub(crate) writer: Option<StreamingPdfWriter<W>>,
    policy: EncodingPolicy,
    /// Document resource key to XObject name.
    x_objects: BTreeMap<String, String>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(policy: EncodingPolicy) -> Self {
        Self {
            writer: None,
            policy,
            x_objects: BTreeMap::new(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Renders a whole laid-out document into an in-memory PDF.
    pub fn render_to_bytes(
        policy: EncodingPolicy,
        document: &Document,
        info: &DocumentInfo,
    ) -> Result<Vec<u8>, RenderError> {
        let mut renderer = Box::new(Self::new(policy));
        renderer.begin_document(Cursor::new(Vec::new()), info)?;
        renderer.add_resources(&document.resources)?;

        let mut page_ids = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let content_id = renderer.render_page_content(page, document.page_size)?;
            page_ids.push(renderer.write_page_object(vec![content_id], document.page_size)?);
        }
        log::debug!("Rendered {} page(s).", page_ids.len());

        let cursor = renderer.finish(page_ids)?;
        Ok(cursor.into_inner())
    }
}

/// Serializes `document` to PDF bytes.
pub fn render_document(
    document: &Document,
    info: &DocumentInfo,
    policy: EncodingPolicy,
) -> Result<Vec<u8>, RenderError> {
    LopdfRenderer::render_to_bytes(policy, document, info)
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut pdf_writer = StreamingPdfWriter::new(writer, PDF_VERSION, helpers::standard_font_dictionary())?;
        if !info.is_empty() {
            pdf_writer.set_info(helpers::info_dictionary(info));
        }
        self.writer = Some(pdf_writer);
        Ok(())
    }

    fn add_resources(
        &mut self,
        resources: &BTreeMap<String, Arc<RasterImage>>,
    ) -> Result<(), RenderError> {
        for (i, (key, raster)) in resources.iter().enumerate() {
            let name = format!("Im{}", i + 1);
            let mut xobject = build_image_xobject(raster)?;
            let writer = self.writer_mut()?;
            if let Some(mask) = xobject.soft_mask.take() {
                let mask_id = writer.write_object(Object::Stream(mask))?;
                link_soft_mask(&mut xobject.image, mask_id);
            }
            let image_id = writer.write_object(Object::Stream(xobject.image))?;
            writer.register_x_object(&name, image_id);
            log::debug!(
                "Embedded image '{}' ({}x{} px) as /{}.",
                key,
                raster.width(),
                raster.height(),
                name
            );
            self.x_objects.insert(key.clone(), name);
        }
        Ok(())
    }

    fn render_page_content(&mut self, page: &Page, page_size: Size) -> Result<ObjectId, RenderError> {
        let content = helpers::render_page_to_content(page, page_size.height, &self.x_objects, self.policy)?;
        let writer = self.writer_mut()?;
        Ok(writer.write_content_stream(content)?)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_size.width.into(), page_size.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        Ok(writer.write_object(page_dict.into())?)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        if let Some(mut internal_writer) = renderer.writer.take() {
            internal_writer.set_page_ids(page_ids);
            Ok(internal_writer.finish()?)
        } else {
            Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ))
        }
    }
}
