//! Cuisine select.
//!
//! Unfocused it reads like a closed dropdown (`label ▾`). Focused, arrows on
//! both sides show that Left/Right step through the options.

use crate::cuisine::Cuisine;
use crate::layout::truncate_text;
use crate::renderer::{FrameBuffer, Pen};
use crate::theme::Palette;
use crate::types::{Attr, BorderStyle, ClipRect};

pub fn paint_cuisine_select(
    buf: &mut FrameBuffer,
    rect: ClipRect,
    palette: &Palette,
    selected: Cuisine,
    focused: bool,
) {
    if rect.is_empty() {
        return;
    }
    let border = if focused { palette.border_focus } else { palette.border };
    buf.fill_rect(rect, palette.surface, None);
    buf.draw_border(rect, BorderStyle::Rounded, Pen::new(border), None);

    let inner = rect.inset(1);
    if inner.width < 3 || inner.height == 0 {
        return;
    }
    let row = inner.y + inner.height / 2;
    let content = ClipRect::new(inner.x + 1, row, inner.width - 2, 1);

    if focused {
        let arrow = Pen::new(palette.primary).with(Attr::BOLD);
        buf.draw_text(content.x, row, "‹", arrow, Some(&content));
        buf.draw_text_right(content.right(), row, "›", arrow, Some(&content));

        let label_area = content.width.saturating_sub(4);
        let label = truncate_text(selected.label(), label_area as usize, "…");
        buf.draw_text_centered(content.x + 2, row, label_area, &label, Pen::new(palette.text), Some(&content));
    } else {
        let label_area = content.width.saturating_sub(2);
        let label = truncate_text(selected.label(), label_area as usize, "…");
        buf.draw_text(content.x, row, &label, Pen::new(palette.text), Some(&content));
        buf.draw_text_right(content.right(), row, "▾", Pen::new(palette.text_muted), Some(&content));
    }
}
