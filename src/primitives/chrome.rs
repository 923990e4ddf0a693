//! Page header and footer.

use crate::layout::truncate_text;
use crate::renderer::{FrameBuffer, Pen};
use crate::theme::Palette;
use crate::types::{Attr, ClipRect};

pub const TITLE: &str = "Zomato Clone";
pub const LOCATION_LABEL: &str = "⌖ Current Location";
pub const KEY_HINTS: &str = "Tab focus · ←→ cuisine · PgUp/PgDn scroll · F2 theme · Ctrl+C quit";

/// Title on the left, location label on the right, a rule underneath.
pub fn paint_header(buf: &mut FrameBuffer, rect: ClipRect, palette: &Palette) {
    if rect.is_empty() {
        return;
    }
    let row = rect.y + rect.height.min(2) / 2;

    let title_pen = Pen::new(palette.primary).with(Attr::BOLD);
    let used = buf.draw_text(rect.x, row, TITLE, title_pen, Some(&rect));

    // Only when it fits next to the title.
    let label_width = crate::layout::string_width(LOCATION_LABEL) as u16;
    if used + label_width + 2 <= rect.width {
        buf.draw_text_right(rect.right(), row, LOCATION_LABEL, Pen::new(palette.text_muted), Some(&rect));
    }

    if rect.height >= 3 {
        buf.draw_hline(rect.x, rect.bottom() - 1, rect.width, '─', Pen::new(palette.border), Some(&rect));
    }
}

/// Key hints on the left, theme name on the right.
pub fn paint_footer(buf: &mut FrameBuffer, rect: ClipRect, palette: &Palette, theme_name: &str) {
    if rect.is_empty() {
        return;
    }
    let pen = Pen::new(palette.text_muted);
    let theme_label = format!("theme: {theme_name}");
    let theme_width = crate::layout::string_width(&theme_label) as u16;

    let hints_width = if rect.width > theme_width + 2 {
        buf.draw_text_right(rect.right(), rect.y, &theme_label, pen, Some(&rect));
        rect.width - theme_width - 2
    } else {
        rect.width
    };

    let hints = truncate_text(KEY_HINTS, hints_width as usize, "…");
    buf.draw_text(rect.x, rect.y, &hints, pen.with(Attr::DIM), Some(&rect));
}
