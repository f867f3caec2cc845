//! ANSI escape sequences used by the heap view.
//!
//! Only what a fullscreen, truecolor redraw needs: cursor placement and
//! visibility, alternate screen, synchronized output, colors and attributes.

use std::io::{self, Write};

use crate::types::{Attr, Color};

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to a 0-indexed position.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

#[inline]
/// Hide the cursor.
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25l")
}

#[inline]
/// Show the cursor.
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear screen and scrollback, cursor home.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[2J\x1b[3J\x1b[H")
}

#[inline]
/// Switch to the alternate screen buffer.
pub fn enter_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1049h")
}

#[inline]
/// Return to the main screen buffer.
pub fn exit_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?1049l")
}

/// Begin synchronized output (terminal buffers until end_sync).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output (terminal flushes buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors and attributes
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set foreground color (truecolor, or the terminal default).
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Default => write!(w, "\x1b[39m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

/// Set background color (truecolor, or the terminal default).
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Default => write!(w, "\x1b[49m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

/// Set text attributes from bitflags.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::UNDERLINE, "4"),
        (Attr::INVERSE, "7"),
    ]
    .into_iter()
    .filter(|(flag, _)| attr.contains(*flag))
    .map(|(_, code)| code)
    .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cursor_to_is_one_indexed() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(emit(|w| cursor_to(w, 9, 4)), "\x1b[5;10H");
    }

    #[test]
    fn test_colors() {
        assert_eq!(emit(|w| fg(w, Color::Rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
        assert_eq!(emit(|w| bg(w, Color::Default)), "\x1b[49m");
    }

    #[test]
    fn test_attrs() {
        assert_eq!(emit(|w| attrs(w, Attr::NONE)), "");
        assert_eq!(emit(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)), "\x1b[1;4m");
    }
}
