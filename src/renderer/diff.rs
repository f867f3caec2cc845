//! Differential renderer for fullscreen mode.
//!
//! Compares each frame with the previous one and writes only the cells that
//! changed. Between two heap steps usually just a handful of nodes change
//! color, so a step costs a few dozen bytes of output.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized block (begin_sync/end_sync)
//! 2. For each cell in the new frame, skip it if the previous frame of the
//!    same size has an identical cell, otherwise render it
//! 3. Flush the output buffer with a single write
//! 4. Keep the frame for the next comparison

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Differential renderer writing to `W` (stdout in the app).
pub struct DiffRenderer<W: Write> {
    out: W,
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl<W: Write> DiffRenderer<W> {
    /// Renderer with no previous frame.
    pub fn new(out: W) -> Self {
        Self {
            out,
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns the number of cells written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<usize> {
        let width = buffer.width();
        let height = buffer.height();
        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == height);

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let mut changed = 0;
        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if previous.and_then(|prev| prev.get(x, y)) == Some(cell) {
                    continue;
                }
                self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                changed += 1;
            }
        }

        ansi::reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(&mut self.out)?;

        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Drop the previous frame so the next render redraws everything.
    ///
    /// Use after a terminal resize.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// True if the next render can diff against a kept frame.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_to(&mut self.out)?;
        self.invalidate();
        Ok(())
    }

    /// Restore the normal screen and cursor.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_to(&mut self.out)
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

// =============================================================================
// Tests
// =============================================================================
