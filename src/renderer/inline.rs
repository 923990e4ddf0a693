//! Inline renderer for normal terminal mode.
//!
//! Writes to the normal buffer instead of the alternate screen. Each frame
//! erases the previous one and rewrites the whole page, so scrollback is
//! left intact.

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

pub struct InlineRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous_height: u16,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous_height: 0,
        }
    }

    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.render_to(buffer, &mut io::stdout().lock())
    }

    /// Erase the previous frame and write `buffer` in its place.
    ///
    /// The cursor is left on the last row of the frame.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<()> {
        ansi::begin_sync(&mut self.output)?;
        self.erase_previous()?;
        self.cell_renderer.reset();

        for y in 0..buffer.height() {
            if y > 0 {
                // Raw mode: a bare newline does not return the carriage.
                self.output.write_str("\r\n");
            }
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.cell_renderer.render_cell_inline(&mut self.output, cell)?;
                }
            }
        }

        ansi::reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(out)?;

        tracing::trace!(rows = buffer.height(), "inline frame rendered");
        self.previous_height = buffer.height();
        Ok(())
    }

    fn erase_previous(&mut self) -> io::Result<()> {
        if self.previous_height > 0 {
            ansi::cursor_up(&mut self.output, self.previous_height - 1)?;
            ansi::cursor_column_zero(&mut self.output)?;
            ansi::erase_down(&mut self.output)?;
        }
        Ok(())
    }

    /// Erase the rendered content.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.erase_previous()?;
        self.output.flush_to(out)?;
        self.previous_height = 0;
        Ok(())
    }

    /// Leave the frame on screen and move below it.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.previous_height > 0 {
            ansi::reset(&mut self.output)?;
            self.output.write_str("\r\n");
            self.output.flush_to(out)?;
        }
        self.previous_height = 0;
        Ok(())
    }

    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::buffer::Pen;
    use crate::types::Rgba;

    fn frame(text: &str) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(6, 2);
        buffer.draw_text(0, 0, text, Pen::new(Rgba::TERMINAL_DEFAULT), None);
        buffer
    }

    #[test]
    fn test_first_render_does_not_erase() {
        let mut renderer = InlineRenderer::new();
        let mut sink = Vec::new();
        renderer.render_to(&frame("sushi"), &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("sushi"));
        assert!(text.contains("\r\n"));
        assert!(!text.contains("\x1b[J"));
        assert_eq!(renderer.previous_height(), 2);
    }

    #[test]
    fn test_second_render_erases_previous_rows() {
        let mut renderer = InlineRenderer::new();
        let mut sink = Vec::new();
        renderer.render_to(&frame("pizza"), &mut sink).unwrap();

        let mut sink = Vec::new();
        renderer.render_to(&frame("sushi"), &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("\x1b[1A\r\x1b[J"));
        assert!(text.contains("sushi"));
    }

    #[test]
    fn test_finish_resets_height() {
        let mut renderer = InlineRenderer::new();
        let mut sink = Vec::new();
        renderer.render_to(&frame("x"), &mut sink).unwrap();
        renderer.finish(&mut sink).unwrap();
        assert_eq!(renderer.previous_height(), 0);
    }
}
