use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object, Stream};
use vitae_render_core::decode_win_ansi;

/// One `Tj` as drawn: position in PDF space, font size and decoded text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

/// Decodes the text runs of one page (1-based), in drawing order.
pub fn page_text_runs(doc: &LopdfDocument, page_num: u32) -> Vec<TextRun> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let (mut x, mut y, mut font_size) = (0.0, 0.0, 0.0);
    for op in &content.operations {
        match op.operator.as_str() {
            "Tf" => font_size = op.operands[1].as_float().unwrap_or(0.0),
            "Td" => {
                x = op.operands[0].as_float().unwrap_or(0.0);
                y = op.operands[1].as_float().unwrap_or(0.0);
            }
            "Tj" => {
                if let Ok(bytes) = op.operands[0].as_str() {
                    runs.push(TextRun {
                        x,
                        y,
                        font_size,
                        text: decode_win_ansi(bytes),
                    });
                }
            }
            _ => {}
        }
    }
    runs
}

/// The text lines of one page (1-based).
pub fn page_lines(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_text_runs(doc, page_num).into_iter().map(|r| r.text).collect()
}

/// Extract all text content from a PDF document, one line per text run
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        for line in page_lines(doc, page_num as u32) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// The page (1-based) where a line with exactly `line` is drawn.
pub fn page_of_line(doc: &LopdfDocument, line: &str) -> Option<u32> {
    doc.get_pages()
        .keys()
        .copied()
        .find(|page_num| page_lines(doc, *page_num).iter().any(|l| l == line))
}

/// All image XObjects, soft masks included.
pub fn image_streams(doc: &LopdfDocument) -> Vec<&Stream> {
    doc.objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .filter(|s| s.dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(b"Image".as_slice()))
        .collect()
}

/// Operators of a page's content stream, in order.
pub fn page_operators(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations.into_iter().map(|op| op.operator).collect())
        .unwrap_or_default()
}

/// Follows a reference to the dictionary it points at; inline dictionaries
/// are returned as is.
fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        other => other.as_dict().ok(),
    }
}

/// Base font names reachable from the pages' `/Resources /Font`, sorted and
/// deduplicated.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Some(resources) = page.get(b"Resources").ok().and_then(|o| resolve_dict(doc, o)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|o| resolve_dict(doc, o)) else {
            continue;
        };
        for (_, font) in font_dict.iter() {
            if let Some(font) = resolve_dict(doc, font)
                && let Ok(base_font) = font.get(b"BaseFont").and_then(Object::as_name)
            {
                fonts.insert(String::from_utf8_lossy(base_font).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Whether any font reachable from the pages uses `encoding`.
pub fn uses_font_encoding(doc: &LopdfDocument, encoding: &[u8]) -> bool {
    doc.get_pages().values().any(|page_id| {
        doc.get_dictionary(*page_id)
            .ok()
            .and_then(|page| page.get(b"Resources").ok())
            .and_then(|o| resolve_dict(doc, o))
            .and_then(|resources| resources.get(b"Font").ok())
            .and_then(|o| resolve_dict(doc, o))
            .is_some_and(|fonts| {
                fonts.iter().any(|(_, font)| {
                    resolve_dict(doc, font)
                        .and_then(|f| f.get(b"Encoding").and_then(Object::as_name).ok())
                        == Some(encoding)
                })
            })
    })
}

/// Raw bytes of a document information entry.
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<Vec<u8>> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    info.get(key).ok()?.as_str().ok().map(<[u8]>::to_vec)
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
