//! Text measurement in terminal cells.
//!
//! Uses Unicode East Asian Width for character widths and grapheme cluster
//! analysis so emoji sequences and combining marks measure correctly.
//! Truncation never splits a grapheme.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint.
///
/// - `0` for control characters and combining marks
/// - `1` for normal-width characters
/// - `2` for wide characters and pictographic emoji
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Misc Symbols and Pictographs, Emoticons, Transport
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF => 2,
        // Supplemental Symbols and Pictographs, Extended-A
        0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair (flag)
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D | 0xFE0F | 0x20E3 => return 2,
            0x1F3FB..=0x1F3FF => return 2,
            _ => {}
        }
    }

    char_width(first)
}

/// Display width of a string.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }
    s.graphemes(true).map(grapheme_width).sum()
}

/// Truncate `text` to `max_width` cells, appending `suffix` when cut.
///
/// The suffix width is accounted for. Text that fits is returned as-is.
pub fn truncate_text(text: &str, max_width: usize, suffix: &str) -> String {
    if max_width == 0 {
        return String::new();
    }
    if string_width(text) <= max_width {
        return text.to_string();
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        return take_width(suffix, max_width);
    }

    let mut result = take_width(text, max_width - suffix_width);
    result.push_str(suffix);
    result
}

/// Longest grapheme prefix of `text` fitting in `max_width` cells.
pub fn take_width(text: &str, max_width: usize) -> String {
    let mut result = String::with_capacity(text.len().min(max_width * 4));
    let mut width = 0;
    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if width + gw > max_width {
            break;
        }
        result.push_str(grapheme);
        width += gw;
    }
    result
}
