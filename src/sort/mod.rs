//! Sort Module - the heap-sort stepper and its inputs/outputs
//!
//! - **sequence** - Random starting arrays
//! - **stepper** - Heap sort as an iterator of suspension points
//! - **event** - The snapshot emitted at each suspension point

mod event;
mod sequence;
mod stepper;

pub use event::{StepEvent, StepKind};
pub use sequence::{RandomArrayGenerator, DEFAULT_RANGE, DEFAULT_SIZE};
pub use stepper::{is_max_heap, HeapStepper};
