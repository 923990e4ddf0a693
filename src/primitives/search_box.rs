//! Search box: bordered single-line input with a drawn cursor.

use crate::layout::{char_width, string_width, truncate_text};
use crate::renderer::{FrameBuffer, Pen};
use crate::theme::Palette;
use crate::types::{Attr, BorderStyle, ClipRect};

pub const PLACEHOLDER: &str = "Search for restaurants or cuisines";
const ICON: &str = "⌕ ";

/// First char index to show so the cursor stays inside `width` columns.
pub fn scroll_start(chars: &[char], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let cursor = cursor.min(chars.len());
    // The cursor cell itself needs one column.
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = char_width(chars[start - 1]);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

pub fn paint_search_box(
    buf: &mut FrameBuffer,
    rect: ClipRect,
    palette: &Palette,
    text: &str,
    cursor: usize,
    focused: bool,
) {
    if rect.is_empty() {
        return;
    }
    let border = if focused { palette.border_focus } else { palette.border };
    buf.fill_rect(rect, palette.surface, None);
    buf.draw_border(rect, BorderStyle::Rounded, Pen::new(border), None);

    let inner = rect.inset(1);
    if inner.is_empty() {
        return;
    }
    let row = inner.y + inner.height / 2;
    let content = ClipRect::new(inner.x + 1, row, inner.width.saturating_sub(2), 1);

    let icon_width = buf.draw_text(content.x, row, ICON, Pen::new(palette.text_muted), Some(&content));
    let field = ClipRect::new(
        content.x + icon_width,
        row,
        content.width.saturating_sub(icon_width),
        1,
    );
    if field.is_empty() {
        return;
    }

    if text.is_empty() {
        // The cursor takes the first column; the placeholder follows it.
        let offset = u16::from(focused);
        let placeholder = truncate_text(PLACEHOLDER, field.width.saturating_sub(offset) as usize, "…");
        buf.draw_text(field.x + offset, row, &placeholder, Pen::new(palette.text_muted), Some(&field));
        if focused {
            draw_cursor(buf, field.x, row, ' ', palette, &field);
        }
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let start = if focused { scroll_start(&chars, cursor, field.width as usize) } else { 0 };

    let visible: String = chars[start..].iter().collect();
    buf.draw_text(field.x, row, &visible, Pen::new(palette.text), Some(&field));

    if focused {
        let before: String = chars[start..cursor].iter().collect();
        let x = field.x + string_width(&before) as u16;
        let under = chars.get(cursor).copied().unwrap_or(' ');
        draw_cursor(buf, x, row, under, palette, &field);
    }
}

fn draw_cursor(buf: &mut FrameBuffer, x: u16, y: u16, under: char, palette: &Palette, clip: &ClipRect) {
    let pen = Pen::new(palette.text).with(Attr::INVERSE);
    buf.draw_text(x, y, &under.to_string(), pen, Some(clip));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::light;

    fn paint(text: &str, cursor: usize, focused: bool, width: u16) -> FrameBuffer {
        let mut buf = FrameBuffer::new(width, 3);
        let bounds = buf.bounds();
        paint_search_box(&mut buf, bounds, &light().palette(), text, cursor, focused);
        buf
    }

    #[test]
    fn test_placeholder_when_empty() {
        let buf = paint("", 0, false, 50);
        assert!(buf.row_text(1).contains("Search for restaurants or cuisines"));
        assert!(buf.row_text(0).starts_with('╭'));
    }

    #[test]
    fn test_focused_placeholder_follows_cursor() {
        let buf = paint("", 0, true, 50);
        let row = buf.row_text(1);
        assert!(row.contains(PLACEHOLDER));
        // "│ ⌕ " is four columns, then the cursor, then the placeholder.
        let cursor_cell = buf.get(4, 1).unwrap();
        assert_eq!(cursor_cell.char, ' ' as u32);
        assert!(cursor_cell.attrs.contains(Attr::INVERSE));
        assert_eq!(buf.get(5, 1).map(|c| c.char), Some('S' as u32));
    }

    #[test]
    fn test_text_and_cursor() {
        let buf = paint("pizza", 2, true, 30);
        assert!(buf.row_text(1).contains("pizza"));
        // "│ ⌕ " is four columns, then "pi", then the cursor over "z".
        let cursor_cell = buf.get(6, 1).unwrap();
        assert_eq!(cursor_cell.char, 'z' as u32);
        assert!(cursor_cell.attrs.contains(Attr::INVERSE));
    }

    #[test]
    fn test_unfocused_has_no_cursor() {
        let buf = paint("pizza", 2, false, 30);
        assert!(buf.cells().iter().all(|c| !c.attrs.contains(Attr::INVERSE)));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let text = "the quick brown fox jumps";
        let buf = paint(text, text.chars().count(), true, 16);
        assert!(buf.row_text(1).contains("jumps"));
        assert!(!buf.row_text(1).contains("quick"));
    }

    #[test]
    fn test_scroll_start() {
        let chars: Vec<char> = "abcdef".chars().collect();
        assert_eq!(scroll_start(&chars, 6, 10), 0);
        assert_eq!(scroll_start(&chars, 6, 3), 4);
        assert_eq!(scroll_start(&chars, 2, 3), 0);
    }
}
