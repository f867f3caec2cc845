//! Fullscreen terminal renderer for step events.

use std::io::{self, Write};

use super::buffer::FrameBuffer;
use super::diff::DiffRenderer;
use super::heap_view::{self, Status};
use super::StepRenderer;
use crate::sort::StepEvent;

/// Keeps the last event and repaints it whenever the event, the status or
/// the terminal size changes. Output goes through a [`DiffRenderer`].
pub struct TerminalRenderer<W: Write> {
    diff: DiffRenderer<W>,
    frame: FrameBuffer,
    status: Status,
    last: Option<StepEvent>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer for a terminal of the given size. Nothing is written yet.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            diff: DiffRenderer::new(out),
            frame: FrameBuffer::new(width, height),
            status: Status::default(),
            last: None,
        }
    }

    /// Switch to the alternate screen.
    pub fn enter(&mut self) -> io::Result<()> {
        self.diff.enter_fullscreen()
    }

    /// Restore the main screen.
    pub fn leave(&mut self) -> io::Result<()> {
        self.diff.exit_fullscreen()
    }

    /// Adopt a new terminal size and redraw from scratch.
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.frame.resize(width, height);
        self.diff.invalidate();
        self.redraw()
    }

    /// Update the title/help status, redrawing only if it changed.
    pub fn set_status(&mut self, status: Status) -> io::Result<()> {
        if self.status == status {
            return Ok(());
        }
        self.status = status;
        self.redraw()
    }

    /// Status shown in the title and help rows.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Repaint the last event.
    pub fn redraw(&mut self) -> io::Result<()> {
        let Some(event) = &self.last else {
            return Ok(());
        };
        heap_view::paint(&mut self.frame, event, &self.status);
        self.diff.render(&self.frame)?;
        Ok(())
    }

    /// The most recently painted frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// The event currently on screen.
    pub fn last_event(&self) -> Option<&StepEvent> {
        self.last.as_ref()
    }
}

impl<W: Write> StepRenderer for TerminalRenderer<W> {
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()> {
        self.last = Some(event.clone());
        self.redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RunState;

    #[test]
    fn test_redraw_without_event_is_noop() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 40, 12);
        renderer.redraw().unwrap();
        assert!(renderer.last_event().is_none());
        assert_eq!(renderer.frame().row_text(0), "");
    }

    #[test]
    fn test_on_step_paints_frame() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 40, 12);
        renderer.on_step(&StepEvent::snapshot(&[3, 1, 2], 0)).unwrap();
        assert!(renderer.frame().row_text(0).contains("Heap Sort"));
        assert_eq!(renderer.last_event().unwrap().data, vec![3, 1, 2]);
    }

    #[test]
    fn test_status_change_repaints() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 60, 12);
        renderer.on_step(&StepEvent::snapshot(&[3, 1, 2], 0)).unwrap();
        renderer
            .set_status(Status {
                state: RunState::Running,
                speed_ms: 250,
                allow_cancel: false,
            })
            .unwrap();
        assert!(renderer.frame().row_text(0).contains("sorting"));
        assert!(renderer.frame().row_text(0).contains("250 ms/step"));
    }

    #[test]
    fn test_resize() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 40, 12);
        renderer.on_step(&StepEvent::snapshot(&[1], 0)).unwrap();
        renderer.resize(50, 15).unwrap();
        assert_eq!(renderer.frame().width(), 50);
        assert_eq!(renderer.frame().height(), 15);
        assert!(renderer.frame().row_text(14).contains("q quit"));
    }
}
