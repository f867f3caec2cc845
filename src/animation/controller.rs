//! Animation controller - run lifecycle and pacing.
//!
//! # State machine
//!
//! ```text
//!          start()                 stepper exhausted
//!   Idle ──────────▶ Running ───────────────────────▶ Idle
//!                      │ cancel() (only if allowed)     ▲
//!                      └────────────────────────────────┘
//! ```
//!
//! `start()` and `reset()` are silently ignored while Running. There is no
//! locking: the controller owns the sequence, and while a run is active the
//! sequence lives inside its [`HeapStepper`].
//!
//! # Pacing
//!
//! The controller never sleeps. The host calls [`AnimationController::poll`]
//! with the current instant; when the pending deadline has passed, the next
//! step is emitted and a new deadline of `now + delay` is set. The delay is
//! read when a pause begins, so `set_speed` affects the next pause and not
//! the one in flight.

use std::time::Instant;

use tracing::{debug, info, trace};

use super::clock::Clock;
use crate::config::RunConfig;
use crate::error::Result;
use crate::renderer::StepRenderer;
use crate::sort::{HeapStepper, RandomArrayGenerator, StepEvent};

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

impl RunState {
    /// Lowercase name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "sorting",
        }
    }
}

/// A sort run in progress.
#[derive(Debug)]
struct ActiveRun {
    stepper: HeapStepper<u32>,
    next_due: Instant,
}

/// Drives a [`HeapStepper`] at a configurable pace and forwards every step
/// to a renderer.
pub struct AnimationController<R> {
    generator: RandomArrayGenerator,
    /// The sequence while idle. Empty while a run holds it.
    data: Vec<u32>,
    sorted_count: usize,
    config: RunConfig,
    run: Option<ActiveRun>,
    last_run_steps: usize,
    renderer: R,
}

impl<R: StepRenderer> AnimationController<R> {
    /// Create an idle controller with a freshly generated sequence.
    ///
    /// Nothing is rendered until [`show`](Self::show) or the first command.
    pub fn new(mut generator: RandomArrayGenerator, config: RunConfig, renderer: R) -> Self {
        let data = generator.generate();
        Self {
            generator,
            data,
            sorted_count: 0,
            config,
            run: None,
            last_run_steps: 0,
            renderer,
        }
    }

    /// Create an idle controller over a given sequence.
    pub fn with_data(
        data: Vec<u32>,
        generator: RandomArrayGenerator,
        config: RunConfig,
        renderer: R,
    ) -> Self {
        Self {
            generator,
            data,
            sorted_count: 0,
            config,
            run: None,
            last_run_steps: 0,
            renderer,
        }
    }

    // =========================================================================
    // Control interface
    // =========================================================================

    /// Begin a sort run. The first step is emitted immediately.
    ///
    /// Returns `Ok(false)` without doing anything if a run is already active.
    pub fn start(&mut self, now: Instant) -> Result<bool> {
        if self.run.is_some() {
            debug!("start ignored: run already active");
            return Ok(false);
        }

        self.sorted_count = 0;
        let data = std::mem::take(&mut self.data);
        info!(size = data.len(), delay_ms = self.speed_ms(), "sort run started");
        self.run = Some(ActiveRun {
            stepper: HeapStepper::full_run(data),
            next_due: now,
        });
        self.poll(now)?;
        Ok(true)
    }

    /// Replace the sequence with a new random one and redraw.
    ///
    /// Returns `Ok(false)` without doing anything while a run is active.
    pub fn reset(&mut self) -> Result<bool> {
        if self.run.is_some() {
            debug!("reset ignored: run active");
            return Ok(false);
        }

        self.data = self.generator.generate();
        self.sorted_count = 0;
        debug!(data = ?self.data, "sequence reset");
        self.show()?;
        Ok(true)
    }

    /// Change the pause between steps.
    ///
    /// No range check; a deadline that is already pending keeps its value.
    pub fn set_speed(&mut self, ms: u64) {
        self.config.delay = std::time::Duration::from_millis(ms);
        debug!(delay_ms = ms, "speed changed");
    }

    /// End the active run early, leaving the sequence as it is.
    ///
    /// Only honored when [`RunConfig::allow_cancel`] is set; otherwise a run
    /// always proceeds to completion and this returns `Ok(false)`.
    pub fn cancel(&mut self) -> Result<bool> {
        if !self.config.allow_cancel {
            debug!("cancel ignored: cancellation disabled");
            return Ok(false);
        }
        let Some(run) = self.run.take() else {
            return Ok(false);
        };

        self.last_run_steps = run.stepper.steps();
        self.sorted_count = run.stepper.sorted_count();
        self.data = run.stepper.into_data();
        info!(steps = self.last_run_steps, "sort run cancelled");
        self.show()?;
        Ok(true)
    }

    // =========================================================================
    // Pacing
    // =========================================================================

    /// Emit the next step if its deadline has passed.
    ///
    /// Returns `Ok(true)` if anything was rendered. When the stepper runs out,
    /// the run ends and a final snapshot with no highlights is rendered.
    pub fn poll(&mut self, now: Instant) -> Result<bool> {
        let Some(run) = self.run.as_mut() else {
            return Ok(false);
        };
        if now < run.next_due {
            return Ok(false);
        }

        match run.stepper.next() {
            Some(event) => {
                trace!(step = run.stepper.steps(), "{event}");
                run.next_due = now + self.config.delay;
                self.sorted_count = event.sorted_count;
                self.renderer.on_step(&event)?;
            }
            None => self.finish()?,
        }
        Ok(true)
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(run) = self.run.take() {
            self.last_run_steps = run.stepper.steps();
            self.sorted_count = run.stepper.sorted_count();
            self.data = run.stepper.into_data();
            info!(steps = self.last_run_steps, "sort run complete");
        }
        self.show()
    }

    /// When the next step is due, if a run is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.run.as_ref().map(|run| run.next_due)
    }

    /// Start a run (if idle) and block on `clock` until it completes.
    ///
    /// Returns the number of steps the run emitted.
    pub fn run_to_completion<C: Clock>(&mut self, clock: &mut C) -> Result<usize> {
        self.start(clock.now())?;
        while let Some(deadline) = self.next_deadline() {
            clock.sleep_until(deadline);
            self.poll(clock.now())?;
        }
        Ok(self.last_run_steps)
    }

    /// Render the current sequence with no highlights.
    pub fn show(&mut self) -> Result<()> {
        let event = StepEvent::snapshot(self.data(), self.sorted_count);
        self.renderer.on_step(&event)?;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        if self.run.is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// True while a run is active.
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// The sequence as it currently stands, mid-run or not.
    pub fn data(&self) -> &[u32] {
        match &self.run {
            Some(run) => run.stepper.data(),
            None => &self.data,
        }
    }

    /// Length of the sorted suffix as of the last rendered step.
    pub fn sorted_count(&self) -> usize {
        self.sorted_count
    }

    /// Pause between steps in milliseconds.
    pub fn speed_ms(&self) -> u64 {
        self.config.delay.as_millis() as u64
    }

    /// Current pacing settings.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Steps emitted by the most recently finished or cancelled run.
    pub fn last_run_steps(&self) -> usize {
        self.last_run_steps
    }

    /// The renderer receiving step events.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the controller and return its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

// =============================================================================
// Tests
// =============================================================================
