//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells holding what should be on screen.
//! Painters draw into it; renderers turn it into escape sequences.
//!
//! - **Flat storage**: `Vec<Cell>`, row-major, `index = y * width + x`.
//! - **Clipping**: every drawing call takes an optional `ClipRect`.
//! - **Transparency**: a pen without background keeps the cell's background.
//! - **Wide characters**: the second cell holds a continuation marker (`0`).

use crate::layout::{char_width, string_width};
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

// =============================================================================
// Pen
// =============================================================================

/// Foreground, optional background and attributes for a drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Rgba,
    /// `None` keeps the background already in the cell.
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl Pen {
    pub const fn new(fg: Rgba) -> Self {
        Self {
            fg,
            bg: None,
            attrs: Attr::NONE,
        }
    }

    pub const fn on(self, bg: Rgba) -> Self {
        Self {
            bg: Some(bg),
            ..self
        }
    }

    pub const fn with(self, attrs: Attr) -> Self {
        Self {
            attrs: attrs.union(self.attrs),
            ..self
        }
    }
}

// =============================================================================
// FrameBuffer
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Create a new buffer filled with blank cells on `bg`.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let cell = Cell {
            bg,
            ..Cell::default()
        };
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer as a ClipRect.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Raw cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Text of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| c.char != 0)
            .filter_map(|c| char::from_u32(c.char))
            .collect()
    }

    /// Every row's text joined with newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    #[inline]
    fn drawable(&self, x: u16, y: u16, clip: Option<&ClipRect>) -> bool {
        self.in_bounds(x, y) && clip.is_none_or(|c| c.contains(x, y))
    }

    /// Set a single cell. Returns true if the cell was written.
    pub fn set_cell(&mut self, x: u16, y: u16, ch: char, pen: Pen, clip: Option<&ClipRect>) -> bool {
        if !self.drawable(x, y, clip) {
            return false;
        }
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = ch as u32;
        cell.fg = pen.fg;
        if let Some(bg) = pen.bg {
            cell.bg = Rgba::blend(bg, cell.bg);
        }
        cell.attrs = pen.attrs;
        true
    }

    /// Fill a rectangle with blank cells on `bg`.
    pub fn fill_rect(&mut self, rect: ClipRect, bg: Rgba, clip: Option<&ClipRect>) {
        let area = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        };
        let Some(area) = area.and_then(|a| a.intersect(&self.bounds())) else {
            return;
        };

        for row in area.y..area.bottom() {
            let start = self.index(area.x, row);
            let end = self.index(area.right(), row);
            for cell in &mut self.cells[start..end] {
                cell.char = b' ' as u32;
                cell.bg = Rgba::blend(bg, cell.bg);
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw text starting at (x, y). Returns the number of columns used.
    ///
    /// Zero-width characters are skipped. A wide character that would be
    /// cut by the clip or the buffer edge ends the run.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, pen: Pen, clip: Option<&ClipRect>) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if !self.drawable(col, y, clip) {
                if col >= self.width || clip.is_some_and(|c| col >= c.right()) {
                    break;
                }
                col += w;
                continue;
            }
            if w == 2 && !self.drawable(col + 1, y, clip) {
                break;
            }

            self.set_cell(col, y, ch, pen, clip);
            if w == 2 {
                self.set_cell(col + 1, y, '\0', pen, clip);
            }
            col += w;
        }

        col.saturating_sub(x)
    }

    /// Draw text right-aligned so it ends at `right` (exclusive).
    pub fn draw_text_right(&mut self, right: u16, y: u16, text: &str, pen: Pen, clip: Option<&ClipRect>) -> u16 {
        let width = string_width(text).min(u16::MAX as usize) as u16;
        self.draw_text(right.saturating_sub(width), y, text, pen, clip)
    }

    /// Draw text centered within `width` columns starting at `x`.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        pen: Pen,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let text_width = string_width(text);
        let offset = (width as usize).saturating_sub(text_width) / 2;
        self.draw_text(x + offset as u16, y, text, pen, clip)
    }

    /// Draw a border around `rect`.
    pub fn draw_border(&mut self, rect: ClipRect, style: BorderStyle, pen: Pen, clip: Option<&ClipRect>) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;

        self.set_cell(rect.x, rect.y, tl, pen, clip);
        self.set_cell(x2, rect.y, tr, pen, clip);
        self.set_cell(x2, y2, br, pen, clip);
        self.set_cell(rect.x, y2, bl, pen, clip);

        for col in (rect.x + 1)..x2 {
            self.set_cell(col, rect.y, horiz, pen, clip);
            self.set_cell(col, y2, horiz, pen, clip);
        }
        for row in (rect.y + 1)..y2 {
            self.set_cell(rect.x, row, vert, pen, clip);
            self.set_cell(x2, row, vert, pen, clip);
        }
    }

    /// Draw a horizontal line of `ch`.
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16, ch: char, pen: Pen, clip: Option<&ClipRect>) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.set_cell(col, y, ch, pen, clip);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PEN: Pen = Pen::new(Rgba::WHITE);

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(4, 2);
        assert_eq!(buf.cells().len(), 8);
        assert_eq!(buf.row_text(0), "    ");
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn test_draw_text_and_clip() {
        let mut buf = FrameBuffer::new(10, 1);
        let clip = ClipRect::new(0, 0, 5, 1);
        let used = buf.draw_text(2, 0, "Sushi", PEN, Some(&clip));
        assert_eq!(used, 3);
        assert_eq!(buf.row_text(0), "  Sus     ");
    }

    #[test]
    fn test_draw_text_left_clip_skips_prefix() {
        let mut buf = FrameBuffer::new(10, 1);
        let clip = ClipRect::new(3, 0, 7, 1);
        buf.draw_text(1, 0, "abcdef", PEN, Some(&clip));
        assert_eq!(buf.row_text(0), "   cdef   ");
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.draw_text(0, 0, "寿司", PEN, None);
        assert_eq!(buf.get(1, 0).map(|c| c.char), Some(0));
        assert_eq!(buf.row_text(0), "寿司");

        // No room for the second half: dropped.
        let mut buf = FrameBuffer::new(3, 1);
        buf.draw_text(0, 0, "寿司", PEN, None);
        assert_eq!(buf.row_text(0), "寿 ");
    }

    #[test]
    fn test_draw_text_right() {
        let mut buf = FrameBuffer::new(10, 1);
        buf.draw_text_right(10, 0, "₹600", PEN, None);
        assert_eq!(buf.row_text(0), "      ₹600");
    }

    #[test]
    fn test_pen_background_optional() {
        let mut buf = FrameBuffer::with_background(3, 1, Rgba::BLUE);
        buf.draw_text(0, 0, "a", PEN, None);
        buf.draw_text(1, 0, "b", PEN.on(Rgba::RED), None);
        assert_eq!(buf.get(0, 0).map(|c| c.bg), Some(Rgba::BLUE));
        assert_eq!(buf.get(1, 0).map(|c| c.bg), Some(Rgba::RED));
    }

    #[test]
    fn test_fill_rect_clipped_to_buffer() {
        let mut buf = FrameBuffer::new(4, 4);
        buf.fill_rect(ClipRect::new(2, 2, 10, 10), Rgba::GREEN, None);
        assert_eq!(buf.get(3, 3).map(|c| c.bg), Some(Rgba::GREEN));
        assert_eq!(buf.get(1, 1).map(|c| c.bg), Some(Rgba::TERMINAL_DEFAULT));
    }

    #[test]
    fn test_draw_border() {
        let mut buf = FrameBuffer::new(4, 3);
        buf.draw_border(buf.bounds(), BorderStyle::Rounded, PEN, None);
        assert_eq!(buf.to_text(), "╭──╮\n│  │\n╰──╯");
    }
}
