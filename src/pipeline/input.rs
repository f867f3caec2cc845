//! Input - crossterm events to controller commands
//!
//! # Bindings
//!
//! | Key                 | Command  |
//! |---------------------|----------|
//! | `s`, `Enter`, Space | Start    |
//! | `r`                 | Reset    |
//! | `+`, `=`, `Up`      | Faster   |
//! | `-`, `Down`         | Slower   |
//! | `Esc`               | Cancel   |
//! | `q`, `Ctrl+C`       | Quit     |

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

// =============================================================================
// COMMAND ENUM
// =============================================================================

/// What the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    /// Shorten the pause between steps.
    Faster,
    /// Lengthen the pause between steps.
    Slower,
    Cancel,
    Quit,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Map a key press to a command. Releases and unbound keys map to None.
pub fn command_for_key(event: KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Command::Faster),
        KeyCode::Char('-') | KeyCode::Down => Some(Command::Slower),
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

/// Map any terminal event to a command.
pub fn convert_event(event: CrosstermEvent) -> Option<Command> {
    match event {
        CrosstermEvent::Key(key) => command_for_key(key),
        CrosstermEvent::Resize(w, h) => Some(Command::Resize(w, h)),
        _ => None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Wait up to `timeout` for the next command.
///
/// Returns None on timeout or when the event did not map to a command.
pub fn poll_command(timeout: Duration) -> std::io::Result<Option<Command>> {
    if poll(timeout)? {
        Ok(convert_event(read()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(key(KeyCode::Char('s'))), Some(Command::Start));
        assert_eq!(command_for_key(key(KeyCode::Enter)), Some(Command::Start));
        assert_eq!(command_for_key(key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for_key(key(KeyCode::Char('+'))), Some(Command::Faster));
        assert_eq!(command_for_key(key(KeyCode::Down)), Some(Command::Slower));
        assert_eq!(command_for_key(key(KeyCode::Esc)), Some(Command::Cancel));
        assert_eq!(command_for_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(event), Some(Command::Quit));

        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(event), None);
    }

    #[test]
    fn test_release_ignored() {
        let event = KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(event), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            convert_event(CrosstermEvent::Resize(100, 40)),
            Some(Command::Resize(100, 40))
        );
        assert_eq!(convert_event(CrosstermEvent::FocusGained), None);
    }
}
