//! End-to-end controller lifecycle against the public API.
//!
//! Run with: cargo test --test lifecycle

use std::time::{Duration, Instant};

use heapviz::animation::{AnimationController, ManualClock, RunState};
use heapviz::config::{AppConfig, RunConfig};
use heapviz::renderer::TraceRenderer;
use heapviz::sort::{RandomArrayGenerator, StepEvent, StepKind};

fn recorder(data: Vec<u32>, config: RunConfig) -> AnimationController<Vec<StepEvent>> {
    let generator = RandomArrayGenerator::seeded(data.len().max(1), 1..=50, 11);
    AnimationController::with_data(data, generator, config, Vec::new())
}

#[test]
fn reference_sequence_trace() {
    let mut controller = recorder(vec![4, 10, 3, 5, 1], RunConfig::with_delay_ms(50));
    let mut clock = ManualClock::new();
    controller.run_to_completion(&mut clock).unwrap();

    let kinds: Vec<StepKind> = controller.renderer().iter().map(|e| e.kind).collect();
    use StepKind::*;
    assert_eq!(
        kinds,
        vec![
            Compare, Compare, Swap, Compare, Swap, Compare, // build
            Extract, Compare, Swap, Compare, Swap, Compare,
            Extract, Compare, Swap, Compare,
            Extract, Compare,
            Extract, Compare,
            Snapshot,
        ]
    );
    assert_eq!(controller.data(), &[1, 3, 4, 5, 10]);
    assert_eq!(clock.elapsed(), Duration::from_millis(20 * 50));
}

#[test]
fn empty_sequence_finishes_without_steps() {
    let mut controller = recorder(Vec::new(), RunConfig::default());
    let mut clock = ManualClock::new();

    assert_eq!(controller.run_to_completion(&mut clock).unwrap(), 0);
    assert_eq!(controller.state(), RunState::Idle);
    assert_eq!(controller.renderer().len(), 1);
    assert_eq!(controller.renderer()[0], StepEvent::snapshot(&[], 0));
}

#[test]
fn reset_then_sort_again() {
    let mut controller = recorder(vec![5, 3, 8, 1, 9], RunConfig::with_delay_ms(10));
    let mut clock = ManualClock::new();
    controller.run_to_completion(&mut clock).unwrap();
    assert_eq!(controller.data(), &[1, 3, 5, 8, 9]);

    assert!(controller.reset().unwrap());
    let mut expected = controller.data().to_vec();
    expected.sort();

    controller.run_to_completion(&mut clock).unwrap();
    assert_eq!(controller.data(), expected.as_slice());
    assert_eq!(controller.sorted_count(), expected.len());
}

#[test]
fn driving_by_hand_matches_clock_driven_run() {
    let mut manual = recorder(vec![9, 2, 7, 2, 4, 8], RunConfig::with_delay_ms(100));
    let mut now = Instant::now();
    manual.start(now).unwrap();
    while let Some(deadline) = manual.next_deadline() {
        assert!(!manual.poll(deadline - Duration::from_millis(1)).unwrap());
        now = deadline;
        manual.poll(now).unwrap();
    }

    let mut clocked = recorder(vec![9, 2, 7, 2, 4, 8], RunConfig::with_delay_ms(100));
    clocked.run_to_completion(&mut ManualClock::new()).unwrap();

    assert_eq!(manual.renderer(), clocked.renderer());
    assert_eq!(manual.data(), &[2, 2, 4, 7, 8, 9]);
}

#[test]
fn seeded_config_is_reproducible() {
    let config = AppConfig {
        size: 12,
        seed: Some(99),
        speed_ms: 5,
        ..AppConfig::default()
    };

    let run = || {
        let mut controller = AnimationController::new(
            config.generator(),
            config.run_config(),
            TraceRenderer::new(Vec::new()),
        );
        controller.show().unwrap();
        controller.run_to_completion(&mut ManualClock::new()).unwrap();
        String::from_utf8(controller.into_renderer().into_inner()).unwrap()
    };

    let first = run();
    assert_eq!(first, run());
    assert!(first.lines().last().unwrap().ends_with("sorted=12"));
}
