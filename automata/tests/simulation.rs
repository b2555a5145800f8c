mod common;

use std::collections::HashSet;
use std::time::Duration;

use automata::{
    Dimensions, Fire, FireCell, Frame, Life, RngSource, Settings, Sir, SirCell, SimulationController,
};
use common::{ManualScheduler, RecordingRenderer, Scripted};

fn settings(rows: usize, cols: usize) -> Settings {
    Settings::new(rows, cols, 100)
}

#[test]
fn life_starts_empty_and_counts_only_changing_generations() {
    let mut paint = RecordingRenderer::default();
    let mut sim = SimulationController::new(Life::new(), settings(20, 20), RngSource::seeded(1), &mut paint);
    assert_eq!(paint.paints, 1);
    assert_eq!(sim.grid().count(|a| a), 0);

    // Blinker
    for c in 4..7 {
        sim.toggle_cell(5, c, &mut paint);
    }
    assert_eq!(sim.generation(), 0);

    assert!(sim.step(&mut paint));
    assert!(sim.step(&mut paint));
    assert_eq!(sim.generation(), 2);

    // Block: a still life never advances the counter
    sim.reset(sim.dims(), &mut ManualScheduler::default(), &mut paint);
    for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        sim.toggle_cell(r, c, &mut paint);
    }
    let before = sim.grid().clone();
    let paints = paint.paints;
    for _ in 0..5 {
        assert!(!sim.step(&mut paint));
    }
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.grid(), &before);
    assert_eq!(paint.paints, paints);
}

#[test]
fn toggle_outside_the_grid_is_ignored() {
    let mut paint = RecordingRenderer::default();
    let mut sim = SimulationController::new(Life::new(), settings(10, 10), RngSource::seeded(1), &mut paint);
    sim.toggle_cell(10, 3, &mut paint);
    sim.toggle_cell(3, 10, &mut paint);
    assert_eq!(paint.paints, 1);
    assert_eq!(sim.grid().count(|a| a), 0);
}

#[test]
fn resize_reseeds_and_zeroes_generation() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Life::new(), settings(20, 20), RngSource::seeded(2), &mut paint);
    sim.randomize(&mut paint);
    while sim.generation() < 3 && sim.step(&mut paint) {}
    assert!(sim.generation() > 0);

    sim.resize(Dimensions { rows: 30, cols: 45 }, &mut sched, &mut paint);
    assert_eq!(sim.grid().dims(), Dimensions { rows: 30, cols: 45 });
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.grid().count(|a| a), 0);
    assert_eq!(paint.last_dims, Some((30, 45)));

    // Same size again: nothing to do
    let paints = paint.paints;
    sim.resize(Dimensions { rows: 30, cols: 45 }, &mut sched, &mut paint);
    assert_eq!(paint.paints, paints);

    // Out-of-range requests are clamped
    sim.resize(Dimensions { rows: 2, cols: 5000 }, &mut sched, &mut paint);
    assert_eq!(sim.dims(), Dimensions { rows: 10, cols: 200 });
}

#[test]
fn fire_resize_builds_a_fresh_forest() {
    let mut paint = RecordingRenderer::default();
    let mut sim = SimulationController::new(Fire, settings(40, 40), RngSource::seeded(3), &mut paint);
    for _ in 0..10 {
        sim.step(&mut paint);
    }
    sim.resize(Dimensions { rows: 12, cols: 60 }, &mut ManualScheduler::default(), &mut paint);
    assert_eq!(sim.grid().dims(), Dimensions { rows: 12, cols: 60 });
    assert!(sim.grid().iter().all(|c| c != FireCell::Burning));

    let trees = sim.census().percent(FireCell::Tree);
    assert!((trees - 60.0).abs() < 10.0, "tree share = {trees}%");
}

#[test]
fn sir_resize_starts_a_fresh_outbreak() {
    let mut paint = RecordingRenderer::default();
    let mut sim = SimulationController::new(Sir, settings(25, 25), RngSource::seeded(11), &mut paint);
    for _ in 0..60 {
        sim.step(&mut paint);
    }

    sim.resize(Dimensions { rows: 15, cols: 40 }, &mut ManualScheduler::default(), &mut paint);
    assert_eq!(sim.grid().dims(), Dimensions { rows: 15, cols: 40 });
    assert_eq!(sim.census().get(SirCell::Infected), 1);
    assert_eq!(sim.census().get(SirCell::Recovered), 0);
    assert_eq!(sim.census().get(SirCell::Susceptible), 15 * 40 - 1);
}

#[test]
fn paused_fire_steps_by_the_rule_alone() {
    // An all-tree forest, then draws that never trigger lightning or growth
    let dims = Dimensions { rows: 20, cols: 20 };
    let rng = Scripted::new(0.0, dims.area(), 0.99);
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Fire, Settings::new(20, 20, 100), rng, &mut paint);
    assert_eq!(sim.census().get(FireCell::Tree), 400);
    assert!(!sim.is_running());

    for _ in 0..3 {
        sim.step(&mut paint);
        assert_eq!(sim.census().get(FireCell::Burning), 0);
        assert_eq!(sim.census().get(FireCell::Tree), 400);
    }

    sim.set_running(true, &mut sched, &mut paint);
    assert_eq!(sim.census().get(FireCell::Burning), 1);
}

#[test]
fn resize_while_running_restarts_the_tick_count() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Sir, settings(10, 10), RngSource::seeded(12), &mut paint);
    sim.set_running(true, &mut sched, &mut paint);

    // 90ms into a 100ms tick the grid is resized
    sched.now = Duration::from_millis(90);
    sim.resize(Dimensions { rows: 20, cols: 20 }, &mut sched, &mut paint);
    assert!(sim.is_running());

    let handle = sched.take();
    assert_eq!(sim.on_frame(&mut sched, handle, Duration::from_millis(120), &mut paint), Frame::Waiting);
    let handle = sched.take();
    assert_eq!(sim.on_frame(&mut sched, handle, Duration::from_millis(190), &mut paint), Frame::Stepped);
}

#[test]
fn settings_are_clamped_on_construction() {
    let raw = Settings {
        dims: Dimensions { rows: 3, cols: 900 },
        tick_interval: Duration::from_millis(2),
    };
    let sim = SimulationController::new(Sir, raw, RngSource::seeded(0), &mut RecordingRenderer::default());
    assert_eq!(sim.dims(), Dimensions { rows: 10, cols: 200 });
    assert_eq!(sim.tick_interval(), Duration::from_millis(10));
}

#[test]
fn starting_fire_lights_a_tree_at_once() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Fire, settings(50, 50), RngSource::seeded(4), &mut paint);
    assert_eq!(sim.census().get(FireCell::Burning), 0);

    sim.set_running(true, &mut sched, &mut paint);
    assert_eq!(sim.census().get(FireCell::Burning), 1);
    assert_eq!(paint.paints, 2);

    // Reset while running re-ignites the new forest too
    sim.reset(sim.dims(), &mut sched, &mut paint);
    assert_eq!(sim.census().get(FireCell::Burning), 1);
}

#[test]
fn fire_never_goes_dormant_while_running() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Fire, settings(30, 30), RngSource::seeded(5), &mut paint);
    sim.set_running(true, &mut sched, &mut paint);

    let mut stepped = 0;
    for i in 1..=400u64 {
        let had_trees = sim.grid().any(|c| c == FireCell::Tree);
        let handle = sched.take();
        let t = Duration::from_millis(30 * i);
        if sim.on_frame(&mut sched, handle, t, &mut paint) == Frame::Stepped {
            stepped += 1;
            if had_trees {
                assert!(sim.grid().any(|c| c == FireCell::Burning), "dormant after frame {i}");
            }
        }
    }
    assert_eq!(stepped, 100);
}

#[test]
fn recovered_is_terminal_across_generations() {
    let mut paint = RecordingRenderer::default();
    let mut sim = SimulationController::new(Sir, settings(25, 25), RngSource::seeded(6), &mut paint);
    assert_eq!(sim.census().get(SirCell::Infected), 1);

    let mut recovered: HashSet<(usize, usize)> = HashSet::new();
    for _ in 0..300 {
        sim.step(&mut paint);
        for &(r, c) in &recovered {
            assert_eq!(sim.grid().get(r, c), SirCell::Recovered);
        }
        recovered.extend(
            sim.grid()
                .cells()
                .filter(|&(_, _, s)| s == SirCell::Recovered)
                .map(|(r, c, _)| (r, c)),
        );
    }
    assert!(!recovered.is_empty());
}

#[test]
fn pausing_neutralizes_an_already_queued_frame() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Life::new(), settings(10, 10), RngSource::seeded(7), &mut paint);
    for c in 3..6 {
        sim.toggle_cell(4, c, &mut paint);
    }

    sim.set_running(true, &mut sched, &mut paint);
    let first = sched.take();
    assert_eq!(sim.on_frame(&mut sched, first, Duration::from_millis(150), &mut paint), Frame::Stepped);
    assert_eq!(sim.generation(), 1);

    // The host already queued this one before the pause
    let queued = sched.latest.expect("re-armed");
    sim.set_running(false, &mut sched, &mut paint);
    assert!(sched.cancelled.contains(&queued));

    for t in [300, 600, 5000] {
        let out = sim.on_frame(&mut sched, queued, Duration::from_millis(t), &mut paint);
        assert_eq!(out, Frame::Ignored);
    }
    assert_eq!(sim.generation(), 1);
    assert!(!sim.is_running());
}

#[test]
fn tick_interval_changes_are_clamped() {
    let mut paint = RecordingRenderer::default();
    let mut sched = ManualScheduler::default();
    let mut sim = SimulationController::new(Sir, settings(10, 10), RngSource::seeded(8), &mut paint);
    sim.set_tick_interval(4000, &mut sched);
    assert_eq!(sim.tick_interval(), Duration::from_millis(1000));
    sim.set_tick_interval(250, &mut sched);
    assert_eq!(sim.settings().interval_ms(), 250);
}
