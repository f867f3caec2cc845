//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells holding what should be on screen.
//! The heap view draws into it; the diff renderer writes it out.
//!
//! Flat storage with row-major indexing: `index = y * width + x`. Drawing
//! outside the grid is silently clipped.

use crate::types::{Attr, Cell, Color};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    /// Width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    /// Height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    /// True if `(x, y)` lies inside the buffer.
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell. Returns false if it fell outside the buffer.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Draw a single character, keeping the existing background if `bg` is None.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        fg: Color,
        bg: Option<Color>,
        attrs: Attr,
    ) -> bool {
        let Some(existing) = self.get(x, y).copied() else {
            return false;
        };
        self.set(
            x,
            y,
            Cell {
                char: ch,
                fg,
                bg: bg.unwrap_or(existing.bg),
                attrs,
            },
        )
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Color) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        for row in y..y2 {
            for col in x..x2 {
                let idx = self.index(col, row);
                self.cells[idx] = Cell { bg, ..Cell::default() };
            }
        }
    }

    /// Draw text at a position. Returns the number of columns written.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Color,
        bg: Option<Color>,
        attrs: Attr,
    ) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            self.draw_char(col, y, ch, fg, bg, attrs);
            col += 1;
        }
        col.saturating_sub(x)
    }

    /// Draw text centered within `width` columns starting at `x`.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Color,
        bg: Option<Color>,
        attrs: Attr,
    ) -> u16 {
        let text_width = text.chars().count();
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x.saturating_add(offset), y, text, fg, bg, attrs)
    }

    /// Text of one row with trailing blanks removed (handy in tests).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let end = start + self.width as usize;
        self.cells[start..end]
            .iter()
            .map(|c| c.char)
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let buf = FrameBuffer::new(4, 2);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.get(3, 1), Some(&Cell::default()));
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut buf = FrameBuffer::new(5, 1);
        let written = buf.draw_text(2, 0, "heap", Color::WHITE, None, Attr::NONE);
        assert_eq!(written, 3);
        assert_eq!(buf.row_text(0), "  hea");
    }

    #[test]
    fn test_draw_text_keeps_background() {
        let mut buf = FrameBuffer::new(3, 1);
        buf.fill_rect(0, 0, 3, 1, Color::GRAY);
        buf.draw_text(0, 0, "ab", Color::WHITE, None, Attr::BOLD);
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.char, 'b');
        assert_eq!(cell.bg, Color::GRAY);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_centered_text() {
        let mut buf = FrameBuffer::new(10, 1);
        buf.draw_text_centered(0, 0, 10, "abcd", Color::WHITE, None, Attr::NONE);
        assert_eq!(buf.row_text(0), "   abcd");
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut buf = FrameBuffer::new(3, 3);
        buf.fill_rect(1, 1, 10, 10, Color::BLACK);
        assert_eq!(buf.get(0, 0).unwrap().bg, Color::Default);
        assert_eq!(buf.get(2, 2).unwrap().bg, Color::BLACK);
    }

    #[test]
    fn test_resize_clears() {
        let mut buf = FrameBuffer::new(2, 2);
        buf.draw_text(0, 0, "xy", Color::WHITE, None, Attr::NONE);
        buf.resize(3, 1);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.row_text(0), "");
    }
}
