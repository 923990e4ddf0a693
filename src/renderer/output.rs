//! Output buffering and stateful cell rendering.
//!
//! Batches a frame's bytes into one write, and tracks the terminal's
//! cursor, colors and attributes so only changes are emitted.

use std::io::{self, Write};

use super::ansi;
use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates a frame's output for a single flush.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data
            .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write a codepoint; invalid ones are dropped.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Write everything to `writer`, flush it, and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn apply_style<W: Write>(&mut self, out: &mut W, cell: &Cell) -> io::Result<()> {
        if cell.attrs != self.last_attrs {
            ansi::reset(out)?;
            ansi::attrs(out, cell.attrs)?;
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }
        if self.last_fg != Some(cell.fg) {
            ansi::fg(out, cell.fg)?;
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            ansi::bg(out, cell.bg)?;
            self.last_bg = Some(cell.bg);
        }
        Ok(())
    }

    /// Render a cell at an absolute position.
    ///
    /// The cursor move is skipped when the cell directly follows the last.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // Continuation of a wide char: the terminal already advanced.
        if cell.char == 0 {
            self.last_x = i32::from(x);
            self.last_y = i32::from(y);
            return Ok(());
        }

        if i32::from(y) != self.last_y || i32::from(x) != self.last_x + 1 {
            ansi::cursor_to(output, x, y)?;
        }
        self.apply_style(output, cell)?;
        output.write_codepoint(cell.char);

        self.last_x = i32::from(x);
        self.last_y = i32::from(y);
        Ok(())
    }

    /// Render a cell at the current cursor position (inline mode).
    pub fn render_cell_inline(&mut self, output: &mut OutputBuffer, cell: &Cell) -> io::Result<()> {
        if cell.char == 0 {
            return Ok(());
        }
        self.apply_style(output, cell)?;
        output.write_codepoint(cell.char);
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char, fg: Rgba, bg: Rgba) -> Cell {
        Cell {
            char: ch as u32,
            fg,
            bg,
            attrs: Attr::NONE,
        }
    }

    #[test]
    fn test_output_buffer_write_and_flush() {
        let mut buf = OutputBuffer::new();
        buf.write_str("Pizza");
        buf.write_char(' ');
        buf.write_codepoint('₹' as u32);
        assert_eq!(buf.as_str(), "Pizza ₹");

        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert!(buf.is_empty());
        assert_eq!(String::from_utf8(sink).unwrap(), "Pizza ₹");
    }

    #[test]
    fn test_sequential_cell_skips_cursor_and_colors() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let a = cell('A', Rgba::WHITE, Rgba::BLACK);

        renderer.render_cell(&mut output, 0, 0, &a).unwrap();
        output.clear();
        renderer.render_cell(&mut output, 1, 0, &a).unwrap();
        assert_eq!(output.as_str(), "A");
    }

    #[test]
    fn test_jump_emits_cursor_only() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let x = cell('X', Rgba::RED, Rgba::BLUE);

        renderer.render_cell(&mut output, 0, 0, &x).unwrap();
        output.clear();
        renderer.render_cell(&mut output, 5, 2, &x).unwrap();
        assert_eq!(output.as_str(), "\x1b[3;6HX");
    }

    #[test]
    fn test_continuation_cell_skipped() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let continuation = cell('\0', Rgba::WHITE, Rgba::BLACK);

        renderer.render_cell(&mut output, 0, 0, &continuation).unwrap();
        assert!(output.is_empty());
        renderer.render_cell_inline(&mut output, &continuation).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_attr_change_resets() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let mut bold = cell('B', Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT);
        bold.attrs = Attr::BOLD;

        renderer.render_cell_inline(&mut output, &bold).unwrap();
        assert_eq!(output.as_str(), "\x1b[0m\x1b[1m\x1b[39m\x1b[49mB");
    }
}
