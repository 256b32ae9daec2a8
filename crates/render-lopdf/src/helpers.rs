//! Page content and dictionary helpers for the lopdf renderer.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use std::collections::BTreeMap;
use vitae_render_core::utils::flip_y;
use vitae_render_core::{DocumentInfo, EncodingPolicy, RenderError, encode_win_ansi};
use vitae_types::{Element, ImageElement, Page, PlacedInstruction, RuleElement, TextElement};

/// Resource name of the single text face.
pub const FONT_RESOURCE: &str = "F1";
pub const FONT_BASE_NAME: &str = "Helvetica";

/// The `/Font` resource dictionary: Helvetica under `F1`.
pub fn standard_font_dictionary() -> Dictionary {
    let helvetica = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FONT_BASE_NAME,
        "Encoding" => "WinAnsiEncoding",
    };
    let mut fonts = Dictionary::new();
    fonts.set(FONT_RESOURCE, Object::Dictionary(helvetica));
    fonts
}

/// A PDF text string: literal when ASCII, UTF-16BE with a byte order mark
/// otherwise.
pub fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        Object::String(value.as_bytes().to_vec(), StringFormat::Literal)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

pub fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    for (key, value) in info.entries() {
        dict.set(key, text_string(value));
    }
    dict
}

/// Draws every instruction of `page` into a content stream.
///
/// `x_objects` maps document resource keys to their XObject names.
pub fn render_page_to_content(
    page: &Page,
    page_height: f32,
    x_objects: &BTreeMap<String, String>,
    policy: EncodingPolicy,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(page_height, x_objects, policy);
    for instruction in &page.instructions {
        page_ctx.draw_instruction(instruction)?;
    }
    Ok(page_ctx.finish())
}

// --- Internal Page Drawing Context ---

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_size: Option<f32>,
    line_width: Option<f32>,
}

struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    x_objects: &'a BTreeMap<String, String>,
    policy: EncodingPolicy,
}

impl<'a> PageContext<'a> {
    fn new(page_height: f32, x_objects: &'a BTreeMap<String, String>, policy: EncodingPolicy) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            x_objects,
            policy,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_instruction(&mut self, instruction: &PlacedInstruction) -> Result<(), RenderError> {
        match &instruction.element {
            Element::Text(text) => self.draw_text(text, instruction.x, instruction.y),
            Element::Rule(rule) => {
                self.draw_rule(rule, instruction.x, instruction.y);
                Ok(())
            }
            Element::Image(image) => self.draw_image(image, instruction.x, instruction.y),
        }
    }

    fn set_font(&mut self, font_size: f32) {
        if self.state.font_size != Some(font_size) {
            self.push("Tf", vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), font_size.into()]);
            self.state.font_size = Some(font_size);
        }
    }

    fn draw_text(&mut self, text: &TextElement, x: f32, baseline_y: f32) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        let encoded = encode_win_ansi(&text.content, self.policy)?;
        self.push("BT", vec![]);
        self.set_font(text.font_size);
        self.push("Td", vec![x.into(), flip_y(baseline_y, self.page_height).into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_rule(&mut self, rule: &RuleElement, x: f32, y: f32) {
        if self.state.line_width != Some(rule.thickness) {
            self.push("w", vec![rule.thickness.into()]);
            self.state.line_width = Some(rule.thickness);
        }
        let line_y = flip_y(y, self.page_height);
        self.push("m", vec![x.into(), line_y.into()]);
        self.push("l", vec![(x + rule.width).into(), line_y.into()]);
        self.push("S", vec![]);
    }

    fn draw_image(&mut self, image: &ImageElement, x: f32, y: f32) -> Result<(), RenderError> {
        let name = self
            .x_objects
            .get(&image.resource)
            .ok_or_else(|| RenderError::Image(format!("no image resource named '{}'", image.resource)))?
            .clone();
        // Image space is the unit square; scale it to the placement and move
        // its lower-left corner into position.
        let bottom = flip_y(y + image.height, self.page_height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                image.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                image.height.into(),
                x.into(),
                bottom.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }
}
