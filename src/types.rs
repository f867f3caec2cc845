//! Drawing primitives shared by the frame buffer and the ANSI writer.
//!
//! The heap view fills a grid of [`Cell`]s; the diff renderer turns changed
//! cells into escape sequences.

// =============================================================================
// Color
// =============================================================================

/// A cell color: either the terminal's own default or 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Color::Rgb(0, 0, 0);
    pub const WHITE: Self = Color::Rgb(255, 255, 255);
    pub const GRAY: Self = Color::Rgb(128, 128, 128);

    /// Unpack a `0xRRGGBB` literal.
    ///
    /// ```
    /// use heapviz::types::Color;
    ///
    /// assert_eq!(Color::hex(0x3498db), Color::Rgb(0x34, 0x98, 0xdb));
    /// ```
    pub const fn hex(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Color::Rgb(r, g, b)
    }
}

// =============================================================================
// Attributes
// =============================================================================

bitflags::bitflags! {
    /// SGR attributes, combined with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const INVERSE = 1 << 3;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One character position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Cell {
    /// Space on the terminal default colors.
    pub const BLANK: Self = Self {
        char: ' ',
        fg: Color::Default,
        bg: Color::Default,
        attrs: Attr::NONE,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::hex(0xf44336), Color::Rgb(0xf4, 0x43, 0x36));
        assert_eq!(Color::hex(0x000000), Color::BLACK);
        // bits above 24 are ignored
        assert_eq!(Color::hex(0xff_ffffff), Color::WHITE);
    }

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.char, ' ');
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert!(cell.attrs.is_empty());
    }

    #[test]
    fn test_attr_combination() {
        let a = Attr::BOLD | Attr::DIM;
        assert!(a.contains(Attr::BOLD));
        assert!(!a.contains(Attr::INVERSE));
    }
}
