//! Font metrics used to predict how much vertical space text consumes.

use super::wrapper::wrap_words;

/// Line height for a font size: `ceil(font_size * 1.2)` points.
///
/// Computed as `font_size * 6 / 5` in `f64` so that sizes whose product is a
/// whole number (10pt -> 12) never get bumped up by binary rounding.
pub fn line_height(font_size: f32) -> f32 {
    (f64::from(font_size) * 6.0 / 5.0).ceil() as f32
}

/// The wrapped lines of a string and the height they occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    pub lines: Vec<String>,
    pub height: f32,
}

impl Measured {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Measures text for pagination.
///
/// Implementations must be deterministic: the same `(text, font_size,
/// max_width)` always yields the same result.
pub trait MetricsProvider: Send + Sync {
    /// Advance width of `text` on a single line, in points.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    fn line_height(&self, font_size: f32) -> f32 {
        line_height(font_size)
    }

    fn measure(&self, text: &str, font_size: f32, max_width: f32) -> Measured {
        let lines = wrap_words(text, max_width, |s| self.text_width(s, font_size));
        let height = lines.len() as f32 * self.line_height(font_size);
        Measured { lines, height }
    }
}

/// Advance widths of the standard Helvetica face for U+0020..=U+007E, in
/// 1/1000 em.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

const HELVETICA_DEFAULT_WIDTH: u16 = 556;

fn helvetica_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_ASCII[ch as usize - 0x20],
        '\u{00A0}' => 278,
        '\u{00B7}' => 278,
        '\u{2013}' => 556,
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' | '\u{201A}' => 222,
        '\u{201C}' | '\u{201D}' | '\u{201E}' => 333,
        '\u{2022}' => 350,
        '\u{2026}' => 1000,
        '\u{2122}' => 1000,
        _ => HELVETICA_DEFAULT_WIDTH,
    }
}

/// Metrics of the PDF standard-14 Helvetica face, the only family the
/// exporter draws with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsProvider for StandardFontMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(helvetica_width(c))).sum();
        units as f32 * font_size / 1000.0
    }
}
