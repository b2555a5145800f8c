// controller.rs - Owns the live grid and drives one automaton

use std::time::Duration;

use tracing::{debug, info};

use crate::animation::{AnimationLoop, Frame, FrameHandle, Scheduler};
use crate::config::Settings;
use crate::grid::{Dimensions, Grid};
use crate::random::{DefaultSource, RandomSource};
use crate::render::{Census, Renderer};
use crate::rules::{Advance, Automaton, Life};

/// Live simulation state for one model: the current buffer, its settings,
/// the model's bookkeeping, and the pacer that decides when to step.
pub struct SimulationController<A: Automaton, R: RandomSource = DefaultSource> {
    automaton : A,
    grid      : Grid<A::Cell>,
    rng       : R,
    settings  : Settings,
    pacer     : AnimationLoop,
}

impl<A: Automaton, R: RandomSource> SimulationController<A, R> {
    /// Seeds the first grid and paints it once.
    pub fn new<D: Renderer + ?Sized>(mut automaton: A, settings: Settings, mut rng: R, renderer: &mut D) -> Self {
        let settings = Settings::default()
            .with_dims(settings.dims)
            .with_interval_ms(settings.interval_ms());
        let grid = automaton.seed(settings.dims, &mut rng);
        info!(model = A::NAME, dims = %settings.dims, interval_ms = settings.interval_ms(), "simulation created");
        renderer.render(&grid);

        Self {
            automaton,
            grid,
            rng,
            settings,
            pacer: AnimationLoop::new(settings.tick_interval),
        }
    }

    pub fn grid(&self) -> &Grid<A::Cell> {
        &self.grid
    }

    pub fn dims(&self) -> Dimensions {
        self.settings.dims
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn tick_interval(&self) -> Duration {
        self.pacer.interval()
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    pub fn is_running(&self) -> bool {
        self.pacer.is_running()
    }

    pub fn census(&self) -> Census<A::Cell> {
        Census::of(&self.grid)
    }

    /// Throws the current buffer away and seeds a fresh one of `dims`.
    /// Auxiliary state starts over. The running flag is left alone; a
    /// running pacer counts its next interval from now.
    pub fn reset<S, D>(&mut self, dims: Dimensions, scheduler: &mut S, renderer: &mut D)
    where
        S: Scheduler + ?Sized,
        D: Renderer + ?Sized,
    {
        self.settings = self.settings.with_dims(dims);
        self.grid = self.automaton.seed(self.settings.dims, &mut self.rng);
        info!(model = A::NAME, dims = %self.settings.dims, "grid reset");

        if self.is_running() {
            self.pacer.restart_reference(scheduler);
            if let Some(fixed) = self.automaton.watchdog(&self.grid, &mut self.rng) {
                self.grid = fixed;
            }
        }
        renderer.render(&self.grid);
    }

    /// `reset` triggered by a dimension change. Unchanged dimensions keep
    /// the current grid.
    pub fn resize<S, D>(&mut self, dims: Dimensions, scheduler: &mut S, renderer: &mut D)
    where
        S: Scheduler + ?Sized,
        D: Renderer + ?Sized,
    {
        let dims = Dimensions::clamped(dims.rows, dims.cols);
        if dims == self.settings.dims {
            return;
        }
        self.reset(dims, scheduler, renderer);
    }

    /// One generation, applied and painted. The watchdog only intervenes
    /// while running, so a paused grid changes by the rule alone.
    pub fn step<D: Renderer + ?Sized>(&mut self, renderer: &mut D) -> bool {
        let running = self.is_running();
        advance(&mut self.automaton, &mut self.grid, &mut self.rng, running, renderer)
    }

    /// Gates the pacer. Starting runs the model's watchdog immediately;
    /// stopping guarantees no further step, even for a frame already queued.
    pub fn set_running<S, D>(&mut self, running: bool, scheduler: &mut S, renderer: &mut D)
    where
        S: Scheduler + ?Sized,
        D: Renderer + ?Sized,
    {
        if running == self.is_running() {
            return;
        }

        if running {
            self.pacer.start(scheduler);
            debug!(model = A::NAME, "simulation started");
            if let Some(fixed) = self.automaton.watchdog(&self.grid, &mut self.rng) {
                self.grid = fixed;
                renderer.render(&self.grid);
            }
        } else {
            self.pacer.stop(scheduler);
            debug!(model = A::NAME, "simulation paused");
        }
    }

    pub fn set_tick_interval<S: Scheduler + ?Sized>(&mut self, ms: u64, scheduler: &mut S) {
        self.settings = self.settings.with_interval_ms(ms);
        self.pacer.set_interval(self.settings.tick_interval, scheduler);
    }

    /// Host frame callback. Steps when the pacer says a tick is due.
    pub fn on_frame<S, D>(&mut self, scheduler: &mut S, handle: FrameHandle, timestamp: Duration, renderer: &mut D) -> Frame
    where
        S: Scheduler + ?Sized,
        D: Renderer + ?Sized,
    {
        let Self { automaton, grid, rng, pacer, .. } = self;
        pacer.on_frame(scheduler, handle, timestamp, || {
            advance(automaton, grid, rng, true, renderer);
        })
    }
}

impl<R: RandomSource> SimulationController<Life, R> {
    pub fn generation(&self) -> u64 {
        self.automaton.generation()
    }

    /// Flips one cell. Out-of-range coordinates are ignored.
    pub fn toggle_cell<D: Renderer + ?Sized>(&mut self, row: usize, col: usize, renderer: &mut D) {
        if !self.grid.dims().contains(row, col) {
            return;
        }
        let mut next = self.grid.clone();
        next.set(row, col, !self.grid.get(row, col));
        self.grid = next;
        renderer.render(&self.grid);
    }

    /// Random soup of the current size, generation back to 0.
    pub fn randomize<D: Renderer + ?Sized>(&mut self, renderer: &mut D) {
        self.grid = self.automaton.random_grid(self.settings.dims, &mut self.rng);
        info!(dims = %self.settings.dims, alive = self.grid.count(|a| a), "life randomized");
        renderer.render(&self.grid);
    }
}

// Swaps in the next buffer (and, while running, any watchdog fix) and
// paints once if anything changed.
fn advance<A, R, D>(automaton: &mut A, grid: &mut Grid<A::Cell>, rng: &mut R, running: bool, renderer: &mut D) -> bool
where
    A: Automaton,
    R: RandomSource,
    D: Renderer + ?Sized,
{
    let stepped = match automaton.advance(grid, rng) {
        Advance::Replaced(next) => {
            *grid = next;
            true
        }
        Advance::FixedPoint => false,
    };

    let fix = if running { automaton.watchdog(grid, rng) } else { None };
    let rescued = match fix {
        Some(fixed) => {
            debug!(model = A::NAME, "watchdog intervened");
            *grid = fixed;
            true
        }
        None => false,
    };

    if stepped || rescued {
        renderer.render(grid);
    }
    stepped || rescued
}
