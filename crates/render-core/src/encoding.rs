//! WinAnsi (Windows-1252) encoding for the standard Type1 fonts.

use crate::error::RenderError;

/// What to do with characters the standard fonts cannot show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Fail the whole render.
    #[default]
    Strict,
    /// Substitute `?` and carry on.
    Replace,
}

const REPLACEMENT: u8 = b'?';

/// Maps one character to its WinAnsi code, if it has one.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' => ch as u8,
        '\u{00A0}'..='\u{00FF}' => ch as u32 as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Encodes `text` for a `Tj` operand.
pub fn encode_win_ansi(text: &str, policy: EncodingPolicy) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match (win_ansi_byte(ch), policy) {
            (Some(b), _) => bytes.push(b),
            (None, EncodingPolicy::Replace) => bytes.push(REPLACEMENT),
            (None, EncodingPolicy::Strict) => {
                return Err(RenderError::Encoding {
                    ch,
                    text: text.to_string(),
                });
            }
        }
    }
    Ok(bytes)
}

/// Characters at 0x80..=0x9F; U+FFFD marks the five unassigned codes.
const HIGH_BLOCK: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

/// Decodes WinAnsi bytes back to text. Unassigned codes become U+FFFD.
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x20..=0x7E | 0xA0..=0xFF => char::from(b),
            0x80..=0x9F => HIGH_BLOCK[usize::from(b - 0x80)],
            _ => '\u{FFFD}',
        })
        .collect()
}
