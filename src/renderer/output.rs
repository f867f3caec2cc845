//! Output buffering and stateful cell rendering.
//!
//! A frame is accumulated in memory and written in one go. While filling it,
//! the cell renderer remembers the last cursor position, colors and
//! attributes so only changes produce escape codes.

use std::io::{self, Write};

use super::ansi;
use crate::types::{Attr, Cell, Color};

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16384),
        }
    }

    #[inline]
    /// Bytes buffered.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    /// Drop buffered output.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    /// Append one character.
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write everything accumulated so far to `writer` and flush it.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Accumulated data as a string (lossy).
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
    last_fg: Option<Color>,
    last_bg: Option<Color>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    /// Renderer with no tracked state.
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render a single cell, emitting escape codes only for what changed.
    pub fn render_cell(
        &mut self,
        output: &mut OutputBuffer,
        x: u16,
        y: u16,
        cell: &Cell,
    ) -> io::Result<()> {
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y)?;
        }

        if cell.attrs != self.last_attrs {
            ansi::reset(output)?;
            ansi::attrs(output, cell.attrs)?;
            // reset cleared the colors too
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            ansi::fg(output, cell.fg)?;
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg != Some(cell.bg) {
            ansi::bg(output, cell.bg)?;
            self.last_bg = Some(cell.bg);
        }

        output.write_char(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
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
