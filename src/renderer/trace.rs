//! Line-per-step renderer for headless runs.
//!
//! ```text
//!    1 compare  [4 10 3 5 1] compared=[1, 3, 4] sorted=0
//!    2 compare  [4 10 3 5 1] compared=[0, 1, 2] sorted=0
//!    3 swap     [10 4 3 5 1] swapped=[0, 1] sorted=0
//! ```

use std::io::{self, Write};

use super::StepRenderer;
use crate::sort::{StepEvent, StepKind};

/// Writes each event as a text line.
pub struct TraceRenderer<W: Write> {
    out: W,
    steps: usize,
}

impl<W: Write> TraceRenderer<W> {
    /// Trace writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, steps: 0 }
    }

    /// Algorithm steps written so far (snapshots not counted).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepRenderer for TraceRenderer<W> {
    fn on_step(&mut self, event: &StepEvent) -> io::Result<()> {
        if event.kind == StepKind::Snapshot {
            writeln!(self.out, "   - {event}")?;
        } else {
            self.steps += 1;
            writeln!(self.out, "{:>4} {event}", self.steps)?;
        }
        self.out.flush()
    }
}
