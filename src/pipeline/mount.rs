//! Mount API - interactive application lifecycle.
//!
//! # Example
//!
//! ```ignore
//! use heapviz::pipeline::mount;
//!
//! let mut handle = mount::mount(&config)?;
//!
//! // Option 1: Run blocking event loop
//! mount::run(&mut handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&mut handle)? {
//!     // Your logic here
//! }
//!
//! handle.unmount()?;
//! ```

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::terminal;
use tracing::{debug, info};

use super::input::{self, Command};
use crate::animation::AnimationController;
use crate::config::{AppConfig, SPEED_MAX_MS, SPEED_MIN_MS, SPEED_STEP_MS};
use crate::error::Result;
use crate::renderer::{Status, TerminalRenderer};

/// Longest wait for input while no step is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

// =============================================================================
// App
// =============================================================================

/// Controller plus a fullscreen renderer, driven by commands.
///
/// Holds no terminal state itself, so it can run against any writer.
pub struct App<W: Write> {
    controller: AnimationController<TerminalRenderer<W>>,
    running: bool,
}

impl<W: Write> App<W> {
    /// Wrap a controller; the app starts in the running state.
    pub fn new(controller: AnimationController<TerminalRenderer<W>>) -> Self {
        Self {
            controller,
            running: true,
        }
    }

    /// Paint the idle sequence along with the current status.
    pub fn show(&mut self) -> Result<()> {
        self.controller.show()?;
        self.sync_status()
    }

    /// Apply one user command.
    pub fn handle(&mut self, command: Command, now: Instant) -> Result<()> {
        debug!(?command, "command");
        match command {
            Command::Start => {
                self.controller.start(now)?;
            }
            Command::Reset => {
                self.controller.reset()?;
            }
            Command::Faster => {
                let ms = faster(self.controller.speed_ms());
                self.controller.set_speed(ms);
            }
            Command::Slower => {
                let ms = slower(self.controller.speed_ms());
                self.controller.set_speed(ms);
            }
            Command::Cancel => {
                self.controller.cancel()?;
            }
            Command::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Command::Resize(w, h) => {
                self.controller.renderer_mut().resize(w, h)?;
            }
        }
        self.sync_status()
    }

    /// Emit the next step if due, then refresh the status line.
    pub fn advance(&mut self, now: Instant) -> Result<bool> {
        let rendered = self.controller.poll(now)?;
        self.sync_status()?;
        Ok(rendered)
    }

    /// How long input polling may block before a step is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// False once quit was requested.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request shutdown.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// The driven controller.
    pub fn controller(&self) -> &AnimationController<TerminalRenderer<W>> {
        &self.controller
    }

    /// The fullscreen renderer.
    pub fn renderer(&self) -> &TerminalRenderer<W> {
        self.controller.renderer()
    }

    fn sync_status(&mut self) -> Result<()> {
        let status = Status {
            state: self.controller.state(),
            speed_ms: self.controller.speed_ms(),
            allow_cancel: self.controller.config().allow_cancel,
        };
        self.controller.renderer_mut().set_status(status)?;
        Ok(())
    }
}

/// One notch faster, never below the minimum.
pub fn faster(ms: u64) -> u64 {
    ms.saturating_sub(SPEED_STEP_MS).clamp(SPEED_MIN_MS, SPEED_MAX_MS)
}

/// One notch slower, never above the maximum.
pub fn slower(ms: u64) -> u64 {
    ms.saturating_add(SPEED_STEP_MS).clamp(SPEED_MIN_MS, SPEED_MAX_MS)
}

// =============================================================================
// Mount Handle
// =============================================================================

/// A mounted app on the real terminal.
///
/// Raw mode and the alternate screen are released on `unmount` or on drop,
/// whichever comes first.
pub struct MountHandle {
    app: App<Stdout>,
    mounted: bool,
}

impl MountHandle {
    /// The mounted app.
    pub fn app(&self) -> &App<Stdout> {
        &self.app
    }

    /// False once quit was requested.
    pub fn is_running(&self) -> bool {
        self.app.is_running()
    }

    /// Request shutdown; the next `tick` returns false.
    pub fn stop(&mut self) {
        self.app.stop();
    }

    /// Leave the alternate screen and restore cooked mode.
    pub fn unmount(mut self) -> Result<()> {
        self.release()?;
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;
        let left = self.app.controller.renderer_mut().leave();
        let raw = terminal::disable_raw_mode();
        left.and(raw)
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort
        let _ = self.release();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Take over the terminal and paint the initial sequence.
pub fn mount(config: &AppConfig) -> Result<MountHandle> {
    let (width, height) = terminal::size()?;
    terminal::enable_raw_mode()?;

    let mut renderer = TerminalRenderer::new(io::stdout(), width, height);
    if let Err(err) = renderer.enter() {
        let _ = terminal::disable_raw_mode();
        return Err(err.into());
    }

    let controller =
        AnimationController::new(config.generator(), config.run_config(), renderer);
    let mut handle = MountHandle {
        app: App::new(controller),
        mounted: true,
    };
    info!(width, height, "mounted");
    handle.app.show()?;
    Ok(handle)
}

// =============================================================================
// Event Loop
// =============================================================================

/// Wait for input or the next step deadline, whichever comes first.
///
/// Returns `Ok(false)` once quit was requested.
pub fn tick(handle: &mut MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    let timeout = handle.app.poll_timeout(Instant::now());
    if let Some(command) = input::poll_command(timeout)? {
        handle.app.handle(command, Instant::now())?;
    }
    handle.app.advance(Instant::now())?;

    Ok(handle.is_running())
}

/// Run the event loop until quit.
pub fn run(handle: &mut MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
