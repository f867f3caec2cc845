//! # heapviz
//!
//! Step-by-step heap sort with a terminal view.
//!
//! ## Architecture
//!
//! The sort is an iterator of [`StepEvent`]s. An [`AnimationController`]
//! pulls one event per deadline and hands it to a [`StepRenderer`]. The
//! controller never sleeps; whoever drives it passes `now` in and asks for
//! the next deadline.
//!
//! ```text
//! RandomArrayGenerator → HeapStepper → AnimationController → StepRenderer
//! ```
//!
//! ## Modules
//!
//! - [`sort`] - Heap sort as a step iterator, sequence generation
//! - [`animation`] - Run lifecycle, pacing, clocks
//! - [`renderer`] - Tree view, diff output, trace output
//! - [`pipeline`] - Input handling and the fullscreen/headless drivers
//! - [`config`] - Defaults, TOML file, validation
//! - [`logging`] - tracing subscriber setup

pub mod animation;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod sort;
pub mod types;

pub use types::*;

pub use animation::{AnimationController, Clock, ManualClock, RunState, SystemClock};
pub use config::{AppConfig, RunConfig};
pub use error::{Error, Result};
pub use renderer::{StepRenderer, TerminalRenderer, TraceRenderer};
pub use sort::{is_max_heap, HeapStepper, RandomArrayGenerator, StepEvent, StepKind};
