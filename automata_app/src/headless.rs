// headless.rs - Runs a model without a window, paced by a tokio interval

use std::time::Duration;

use anyhow::{Context, Result};
use automata::{
    Automaton, Cell, Census, Fire, Frame, Grid, Life, ModelKind, Renderer, RngSource, Scheduler,
    Settings, Sir, SimulationController,
};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::scheduler::TickScheduler;

#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    pub model        : ModelKind,
    pub settings     : Settings,
    pub seed         : Option<u64>,
    pub frames       : u64,
    pub frame_period : Duration,      // Stand-in for the display refresh
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames : u64,
    pub steps  : u64,
    pub paints : u64,
}

/// Renderer that logs each painted generation's census.
#[derive(Debug, Default)]
pub struct LogRenderer {
    paints: u64,
}

impl Renderer for LogRenderer {
    fn render<C: Cell>(&mut self, grid: &Grid<C>) {
        self.paints += 1;
        debug!(paint = self.paints, census = %Census::of(grid), "rendered");
    }
}

pub fn run(opts: HeadlessOptions) -> Result<RunSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(async move {
        let mut log = LogRenderer::default();
        let rng = RngSource::from_seed_option(opts.seed);
        match opts.model {
            ModelKind::Life => {
                let mut sim = SimulationController::new(Life::new(), opts.settings, rng, &mut log);
                // An empty board would never change
                sim.randomize(&mut log);
                drive(sim, &opts, log).await
            }
            ModelKind::Fire => drive(SimulationController::new(Fire, opts.settings, rng, &mut log), &opts, log).await,
            ModelKind::Sir  => drive(SimulationController::new(Sir, opts.settings, rng, &mut log), &opts, log).await,
        }
    })
}

/// Delivers up to `opts.frames` frames, stopping early on Ctrl-C.
pub async fn drive<A: Automaton>(
    mut sim: SimulationController<A>,
    opts: &HeadlessOptions,
    mut log: LogRenderer,
) -> Result<RunSummary> {
    let mut scheduler = TickScheduler::new();
    let mut ticker = tokio::time::interval(opts.frame_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        model = A::NAME,
        dims = %sim.dims(),
        interval_ms = sim.settings().interval_ms(),
        frames = opts.frames,
        "headless run starting"
    );
    sim.set_running(true, &mut scheduler, &mut log);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut summary = RunSummary { frames: 0, steps: 0, paints: 0 };
    while summary.frames < opts.frames {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
            _ = ticker.tick() => {}
        }

        let Some(handle) = scheduler.take_due() else {
            break;
        };
        let now = scheduler.now();
        if sim.on_frame(&mut scheduler, handle, now, &mut log) == Frame::Stepped {
            summary.steps += 1;
        }
        summary.frames += 1;
    }

    sim.set_running(false, &mut scheduler, &mut log);
    summary.paints = log.paints;
    info!(
        frames = summary.frames,
        steps = summary.steps,
        census = %sim.census(),
        "headless run finished"
    );
    Ok(summary)
}
