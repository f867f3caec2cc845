//! Step events - one per suspension point of a sort run.
//!
//! A [`StepEvent`] is an immutable snapshot. The stepper creates it, the
//! controller hands it to the renderer, and then it is dropped.

use std::fmt;

/// What happened at a suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// About to compare a node with its children (`compared` is set).
    Compare,
    /// Two nodes were swapped while sifting down (`swapped` is set).
    Swap,
    /// The heap root was moved into the sorted suffix (`swapped` is set).
    Extract,
    /// Plain re-render with no highlights (after a reset or a finished run).
    Snapshot,
}

impl StepKind {
    /// Short label used in traces and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Extract => "extract",
            StepKind::Snapshot => "snapshot",
        }
    }
}

/// Snapshot of the sequence at one observable moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent<T = u32> {
    pub kind: StepKind,
    /// Values in index order, copied at emission time.
    pub data: Vec<T>,
    /// Indices currently being compared, parent first.
    pub compared: Vec<usize>,
    /// Indices that were just swapped, parent first.
    pub swapped: Vec<usize>,
    /// Length of the trailing sorted suffix.
    pub sorted_count: usize,
}

impl<T: Clone> StepEvent<T> {
    /// Event with no highlighted indices.
    pub fn snapshot(data: &[T], sorted_count: usize) -> Self {
        Self {
            kind: StepKind::Snapshot,
            data: data.to_vec(),
            compared: Vec::new(),
            swapped: Vec::new(),
            sorted_count,
        }
    }

    pub(crate) fn compare(data: &[T], compared: Vec<usize>, sorted_count: usize) -> Self {
        Self {
            kind: StepKind::Compare,
            data: data.to_vec(),
            compared,
            swapped: Vec::new(),
            sorted_count,
        }
    }

    pub(crate) fn swap(
        kind: StepKind,
        data: &[T],
        swapped: [usize; 2],
        sorted_count: usize,
    ) -> Self {
        Self {
            kind,
            data: data.to_vec(),
            compared: Vec::new(),
            swapped: swapped.to_vec(),
            sorted_count,
        }
    }
}

impl<T> StepEvent<T> {
    /// True if `index` lies in the sorted suffix.
    pub fn is_sorted(&self, index: usize) -> bool {
        index < self.data.len() && index >= self.data.len() - self.sorted_count.min(self.data.len())
    }
}

impl<T: fmt::Display> fmt::Display for StepEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} [", self.kind.label())?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")?;
        if !self.compared.is_empty() {
            write!(f, " compared={:?}", self.compared)?;
        }
        if !self.swapped.is_empty() {
            write!(f, " swapped={:?}", self.swapped)?;
        }
        write!(f, " sorted={}", self.sorted_count)
    }
}
