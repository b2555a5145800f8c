// life.rs - Conway's Game of Life on a bounded (non-wrapping) grid

use tracing::debug;

use crate::grid::{Dimensions, Grid};
use crate::random::RandomSource;
use crate::render::{Cell, Rgb};
use crate::rules::{Advance, Automaton};

/// Density of `randomize`: roughly a third of the cells start alive.
pub const RANDOM_FILL: f64 = 1.0 / 3.0;

impl Cell for bool {
    const ALL: &'static [Self] = &[true, false];

    fn colour(self) -> Rgb {
        if self { Rgb::gray(0x00) } else { Rgb::gray(0xff) }
    }

    fn label(self) -> &'static str {
        if self { "Alive" } else { "Dead" }
    }
}

/// Number of live cells among the in-range Moore neighbours.
pub fn live_neighbors(grid: &Grid<bool>, row: usize, col: usize) -> usize {
    grid.moore_neighbors(row, col).filter(|&alive| alive).count()
}

/// One synchronous generation. Deterministic: no draws are made.
pub fn next_generation(grid: &Grid<bool>) -> Grid<bool> {
    grid.map(|row, col, alive| {
        match (alive, live_neighbors(grid, row, col)) {
            (true, 2) | (_, 3) => true,   // Survival or birth
            _                  => false,  // Death or stays dead
        }
    })
}

/// Life's bookkeeping: the generation counter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Life {
    generation: u64,
}

impl Life {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generations that actually changed the grid since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fills a fresh grid with about `RANDOM_FILL` live cells and restarts
    /// the counter.
    pub fn random_grid<R: RandomSource + ?Sized>(&mut self, dims: Dimensions, rng: &mut R) -> Grid<bool> {
        self.generation = 0;
        Grid::from_fn(dims, |_, _| rng.chance(RANDOM_FILL))
    }
}

impl Automaton for Life {
    type Cell = bool;

    const NAME: &'static str = "Game of Life";

    fn seed<R: RandomSource + ?Sized>(&mut self, dims: Dimensions, _rng: &mut R) -> Grid<bool> {
        self.generation = 0;
        Grid::new(dims, false)
    }

    fn advance<R: RandomSource + ?Sized>(&mut self, grid: &Grid<bool>, _rng: &mut R) -> Advance<bool> {
        let next = next_generation(grid);
        if next == *grid {
            return Advance::FixedPoint;
        }
        self.generation += 1;
        debug!(generation = self.generation, "life advanced");
        Advance::Replaced(next)
    }
}
