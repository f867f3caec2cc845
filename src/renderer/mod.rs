//! Renderers - consumers of step events.
//!
//! The controller knows only [`StepRenderer`]. It calls `on_step` at every
//! suspension point and once more with a no-highlight snapshot after a reset
//! or a finished run.
//!
//! # Implementations
//!
//! - **Fullscreen** ([`TerminalRenderer`]): paints the heap as a tree into a
//!   [`FrameBuffer`] and writes only changed cells via [`DiffRenderer`]
//! - **Trace** ([`TraceRenderer`]): one text line per step, for headless runs
//! - **Recording** (`Vec<StepEvent>`): keeps every event, for tests

use std::io;

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod heap_view;
pub mod output;
pub mod terminal;
pub mod trace;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use heap_view::{NodeState, Status};
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use terminal::TerminalRenderer;
pub use trace::TraceRenderer;

use crate::sort::StepEvent;

/// Receives every observable moment of a run, in order.
pub trait StepRenderer {
    /// Draw or record one event.
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()>;
}

impl StepRenderer for Vec<StepEvent> {
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

impl<R: StepRenderer + ?Sized> StepRenderer for &mut R {
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()> {
        (**self).on_step(event)
    }
}

impl<R: StepRenderer + ?Sized> StepRenderer for Box<R> {
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()> {
        (**self).on_step(event)
    }
}
