//! Animation Module - pacing a sort run for observation
//!
//! - **controller** - Idle/Running lifecycle, start/reset/speed/cancel
//! - **clock** - Time sources for blocking drivers and tests

mod clock;
mod controller;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{AnimationController, RunState};
