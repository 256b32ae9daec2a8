//! Raster images as PDF image XObjects.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Object, Stream, dictionary};
use std::io::Write;
use vitae_render_core::RenderError;
use vitae_types::RasterImage;

/// The colour plane of an image, plus its alpha plane when any pixel is not
/// fully opaque.
pub struct ImageXObject {
    pub image: Stream,
    pub soft_mask: Option<Stream>,
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn image_stream(width: u32, height: u32, color_space: &str, data: &[u8]) -> Result<Stream, RenderError> {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(width),
        "Height" => i64::from(height),
        "ColorSpace" => color_space,
        "BitsPerComponent" => 8_i64,
        "Filter" => "FlateDecode",
    };
    Ok(Stream::new(dict, deflate(data)?))
}

/// Builds the XObject streams for `raster`. The caller links the soft mask
/// by setting `SMask` once it knows the mask's object id.
pub fn build_image_xobject(raster: &RasterImage) -> Result<ImageXObject, RenderError> {
    let pixels = raster.rgba().chunks_exact(4);
    let rgb: Vec<u8> = pixels.clone().flat_map(|px| [px[0], px[1], px[2]]).collect();
    let image = image_stream(raster.width(), raster.height(), "DeviceRGB", &rgb)?;

    let soft_mask = if raster.has_transparency() {
        let alpha: Vec<u8> = pixels.map(|px| px[3]).collect();
        Some(image_stream(raster.width(), raster.height(), "DeviceGray", &alpha)?)
    } else {
        None
    };

    Ok(ImageXObject { image, soft_mask })
}

pub fn link_soft_mask(image: &mut Stream, mask_id: lopdf::ObjectId) {
    image.dict.set("SMask", Object::Reference(mask_id));
}
