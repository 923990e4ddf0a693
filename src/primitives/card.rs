//! Restaurant card.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ https://images.unsplash.c…   │  image band
//! │                              │
//! │ The Spice Garden    4.2 ★    │  name, rating badge
//! │ Indian, Chinese              │
//! │                              │
//! │ ◷ 30-35 mins    ₹600 for two │
//! │ ⌖ Downtown                   │
//! ╰──────────────────────────────╯
//! ```

use crate::catalog::Restaurant;
use crate::layout::{string_width, truncate_text};
use crate::renderer::{FrameBuffer, Pen};
use crate::theme::Palette;
use crate::types::{Attr, BorderStyle, ClipRect};

/// Rows of the image placeholder band.
pub const IMAGE_ROWS: u16 = 2;

pub fn rating_badge(rating: f32) -> String {
    format!(" {rating} ★ ")
}

pub fn delivery_label(restaurant: &Restaurant) -> String {
    format!("◷ {} mins", restaurant.delivery_time)
}

pub fn price_label(restaurant: &Restaurant) -> String {
    format!("{} for two", restaurant.price_for_two)
}

/// Paint `restaurant` into `rect`, drawing only inside `clip`.
pub fn paint_card(buf: &mut FrameBuffer, rect: ClipRect, clip: &ClipRect, palette: &Palette, restaurant: &Restaurant) {
    let Some(visible) = rect.intersect(clip) else {
        return;
    };
    buf.fill_rect(rect, palette.surface, Some(&visible));
    buf.draw_border(rect, BorderStyle::Rounded, Pen::new(palette.border), Some(&visible));

    let inner = rect.inset(1);
    let Some(inner_visible) = inner.intersect(&visible) else {
        return;
    };
    let clip = &inner_visible;
    let x = inner.x + 1;
    let right = inner.right().saturating_sub(1);
    let text_width = inner.width.saturating_sub(2) as usize;
    let muted = Pen::new(palette.text_muted);

    // Image band
    let band = ClipRect::new(inner.x, inner.y, inner.width, IMAGE_ROWS.min(inner.height));
    buf.fill_rect(band, palette.image, Some(clip));
    let url = truncate_text(restaurant.image, text_width, "…");
    buf.draw_text(x, band.y, &url, muted.with(Attr::DIM), Some(clip));

    let mut row = inner.y + IMAGE_ROWS;

    // Name and rating
    let badge = rating_badge(restaurant.rating);
    let badge_width = string_width(&badge);
    let badge_pen = Pen::new(palette.rating_fg).on(palette.rating_bg).with(Attr::BOLD);
    let name_width = if text_width > badge_width + 1 {
        buf.draw_text_right(right, row, &badge, badge_pen, Some(clip));
        text_width - badge_width - 1
    } else {
        text_width
    };
    let name = truncate_text(restaurant.name, name_width, "…");
    buf.draw_text(x, row, &name, Pen::new(palette.text).with(Attr::BOLD), Some(clip));
    row += 1;

    let cuisine = truncate_text(restaurant.cuisine, text_width, "…");
    buf.draw_text(x, row, &cuisine, muted, Some(clip));
    row += 2;

    // Delivery time left, price right; the price wins when both do not fit.
    let price = price_label(restaurant);
    let price_width = string_width(&price);
    let delivery_width = if text_width > price_width + 1 {
        buf.draw_text_right(right, row, &price, muted, Some(clip));
        text_width - price_width - 1
    } else {
        text_width
    };
    let delivery = truncate_text(&delivery_label(restaurant), delivery_width, "…");
    buf.draw_text(x, row, &delivery, muted, Some(clip));
    row += 1;

    let location = truncate_text(&format!("⌖ {}", restaurant.location), text_width, "…");
    buf.draw_text(x, row, &location, muted, Some(clip));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::layout::CARD_HEIGHT;
    use crate::theme::light;

    fn paint(width: u16, restaurant: &Restaurant) -> FrameBuffer {
        let mut buf = FrameBuffer::new(width, CARD_HEIGHT);
        let rect = buf.bounds();
        paint_card(&mut buf, rect, &rect, &light().palette(), restaurant);
        buf
    }

    #[test]
    fn test_labels() {
        let r = &catalog()[0];
        assert_eq!(rating_badge(r.rating), " 4.2 ★ ");
        assert_eq!(delivery_label(r), "◷ 30-35 mins");
        assert_eq!(price_label(r), "₹600 for two");
    }

    #[test]
    fn test_rating_badge_prints_shortest_form() {
        assert_eq!(rating_badge(4.0), " 4 ★ ");
        assert_eq!(rating_badge(4.5), " 4.5 ★ ");
    }

    #[test]
    fn test_card_rows() {
        let buf = paint(36, &catalog()[0]);
        assert!(buf.row_text(0).starts_with('╭'));
        assert!(buf.row_text(1).contains("https://images.unsplash.com"));
        assert!(buf.row_text(3).contains("The Spice Garden"));
        assert!(buf.row_text(3).contains("4.2 ★"));
        assert!(buf.row_text(4).contains("Indian, Chinese"));
        assert!(buf.row_text(6).contains("◷ 30-35 mins"));
        assert!(buf.row_text(6).contains("₹600 for two"));
        assert!(buf.row_text(7).contains("⌖ Downtown"));
        assert!(buf.row_text(8).starts_with('╰'));
    }

    #[test]
    fn test_narrow_card_truncates_name() {
        let buf = paint(20, &catalog()[1]);
        let row = buf.row_text(3);
        assert!(row.contains('…'));
        assert!(row.contains("4.5 ★"));
    }

    #[test]
    fn test_clip_hides_rows() {
        let mut buf = FrameBuffer::new(36, CARD_HEIGHT);
        let rect = buf.bounds();
        let clip = ClipRect::new(0, 0, 36, 4);
        paint_card(&mut buf, rect, &clip, &light().palette(), &catalog()[2]);
        assert!(buf.row_text(3).contains("Sushi Express"));
        assert!(!buf.to_text().contains("Eastside"));
        assert!(!buf.row_text(8).contains('╰'));
    }

    #[test]
    fn test_rating_badge_colors() {
        let palette = light().palette();
        let buf = paint(36, &catalog()[0]);
        let star_x = (0..36).find(|&x| buf.get(x, 3).map(|c| c.char) == Some('★' as u32));
        let cell = buf.get(star_x.unwrap(), 3).unwrap();
        assert_eq!(cell.bg, palette.rating_bg);
        assert_eq!(cell.fg, palette.rating_fg);
    }
}
