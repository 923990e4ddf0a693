//! Differential renderer for fullscreen mode.
//!
//! Compares the new frame to the previous one and only outputs cells that
//! changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized block (begin_sync/end_sync)
//! 2. For each cell: skip it if the previous frame has the same cell,
//!    otherwise render it with the StatefulCellRenderer
//! 3. Flush the output buffer in one write
//! 4. Keep the frame for the next comparison

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to stdout. Returns the number of cells written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<usize> {
        self.render_to(buffer, &mut io::stdout().lock())
    }

    /// Render a frame to `out`, writing only changed cells.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<usize> {
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == buffer.width() && p.height() == buffer.height());
        let previous = if same_size { self.previous.as_ref() } else { None };

        self.cell_renderer.reset();
        ansi::begin_sync(&mut self.output)?;
        if previous.is_none() {
            ansi::reset(&mut self.output)?;
            ansi::clear_screen(&mut self.output)?;
        }

        let mut changed = 0;
        let width = buffer.width() as usize;
        for (i, cell) in buffer.cells().iter().enumerate() {
            if previous.is_some_and(|p| p.cells()[i] == *cell) {
                continue;
            }
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
            changed += 1;
        }

        ansi::reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(out)?;

        tracing::trace!(changed, "diff frame rendered");
        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Forget the previous frame. The next render redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter the alternate screen with the cursor hidden.
    pub fn enter_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_to(out)?;
        self.invalidate();
        Ok(())
    }

    /// Leave the alternate screen and show the cursor.
    pub fn exit_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_to(out)?;
        self.invalidate();
        Ok(())
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}
