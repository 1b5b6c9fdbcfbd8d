//! Advance widths of the standard Helvetica faces and greedy word wrap.
//!
//! Widths are in 1/1000 em for printable ASCII (0x20..=0x7E), index =
//! `char - 32`. Bold text uses the regular table scaled up slightly; the
//! oblique faces share the upright widths.

use placard_style::TextStyle;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const BULLET_WIDTH: u16 = 350;
const FALLBACK_WIDTH: u16 = 556;
const BOLD_SCALE: f32 = 1.06;

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
/// Distance from the top of a line box to its baseline, as a multiple of the font size.
pub const BASELINE_FACTOR: f32 = 0.8;

fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - 32],
        '\u{2022}' => BULLET_WIDTH,
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in points.
pub fn measure(text: &str, style: &TextStyle) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    let width = units as f32 * style.font_size / 1000.0;
    if style.is_bold() { width * BOLD_SCALE } else { width }
}

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Words longer than a whole line are kept intact on their own line. Explicit
/// newlines always break. An empty paragraph yields a single empty line so it
/// still takes up vertical space.
pub fn wrap(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let space = measure(" ", style);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in raw_line.split_whitespace() {
            let word_width = measure(word, style);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(current);
    }
    lines
}

/// Characters WinAnsi places in 0x80..=0x9F, indexed by `byte - 0x80`.
/// Unassigned slots are `None`.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// Encodes text for a WinAnsi-encoded standard font. Characters the
/// encoding cannot show become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            // C1 control range: those bytes mean other glyphs in WinAnsi.
            0x80..=0x9F => b'?',
            code @ 0..=0xFF => code as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .position(|&high| high == Some(c))
                .map_or(b'?', |i| 0x80 + i as u8),
        })
        .collect()
}

/// Encodes a string for a PDF text string outside content streams
/// (e.g. the Info dictionary): plain ASCII as is, anything else as
/// UTF-16BE with a byte order mark.
pub fn to_pdf_text_string(s: &str) -> Vec<u8> {
    if s.is_ascii() {
        return s.as_bytes().to_vec();
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}
