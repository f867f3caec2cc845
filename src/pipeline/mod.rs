//! Application pipeline
//!
//! Wires input, the animation controller and a renderer together.
//!
//! ```text
//! crossterm event → Command → AnimationController → StepRenderer → terminal
//!                                   ↑
//!                          deadline-driven poll
//! ```
//!
//! - [`mount`]: fullscreen interactive mode
//! - [`headless`]: plain trace to any writer

pub mod headless;
pub mod input;
pub mod mount;

pub use headless::run_headless;
pub use input::{command_for_key, convert_event, poll_command, Command};
pub use mount::{mount, run, tick, App, MountHandle};
