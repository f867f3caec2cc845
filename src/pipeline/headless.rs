//! Headless runs: no terminal takeover, one trace line per step.

use std::io::Write;

use tracing::info;

use crate::animation::{AnimationController, Clock};
use crate::config::AppConfig;
use crate::error::Result;
use crate::renderer::TraceRenderer;

/// Print the initial sequence, sort it at the configured pace and print
/// every step to `out`. Returns the number of steps.
pub fn run_headless<W: Write, C: Clock>(
    config: &AppConfig,
    out: W,
    clock: &mut C,
) -> Result<usize> {
    let renderer = TraceRenderer::new(out);
    let mut controller =
        AnimationController::new(config.generator(), config.run_config(), renderer);
    controller.show()?;
    let steps = controller.run_to_completion(clock)?;
    info!(steps, data = ?controller.data(), "headless run complete");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualClock;

    #[test]
    fn test_headless_trace() {
        let config = AppConfig {
            size: 6,
            seed: Some(3),
            speed_ms: 10,
            ..AppConfig::default()
        };
        let mut clock = ManualClock::new();
        let mut out = Vec::new();
        let steps = run_headless(&config, &mut out, &mut clock).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // initial snapshot, every step, final snapshot
        assert_eq!(lines.len(), steps + 2);
        assert!(lines[0].starts_with("   - snapshot"));
        assert!(lines[lines.len() - 1].ends_with("sorted=6"));
        assert_eq!(clock.elapsed(), std::time::Duration::from_millis(10 * steps as u64));
    }
}
