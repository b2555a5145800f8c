// fire.rs - Forest-fire spread with regrowth and lightning

use tracing::{debug, trace};

use crate::grid::{Dimensions, Grid};
use crate::random::RandomSource;
use crate::render::{Cell, Rgb};
use crate::rules::{Advance, Automaton};

pub const TREE_PROB: f64 = 0.6;                       // Initial seeding only
pub const GROW_PROB: f64 = 0.01;                      // Empty -> Tree
pub const LIGHTNING_PROB: f64 = 0.0001;               // Tree -> Burning without a burning neighbour

/// Random picks tried before the watchdog falls back to listing trees.
pub const MAX_IGNITION_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireCell {
    Empty,
    Tree,
    Burning,
}

impl Cell for FireCell {
    const ALL: &'static [Self] = &[FireCell::Empty, FireCell::Tree, FireCell::Burning];

    fn colour(self) -> Rgb {
        match self {
            FireCell::Empty   => Rgb::gray(0xee),
            FireCell::Tree    => Rgb(0x00, 0x80, 0x00),
            FireCell::Burning => Rgb(0xff, 0x00, 0x00),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FireCell::Empty   => "Empty",
            FireCell::Tree    => "Tree",
            FireCell::Burning => "Burning",
        }
    }
}

/// Every cell independently a tree with probability `TREE_PROB`. Nothing burns yet.
pub fn seed<R: RandomSource + ?Sized>(dims: Dimensions, rng: &mut R) -> Grid<FireCell> {
    Grid::from_fn(dims, |_, _| {
        if rng.chance(TREE_PROB) { FireCell::Tree } else { FireCell::Empty }
    })
}

/// One synchronous generation over the von Neumann neighbourhood.
pub fn next_generation<R: RandomSource + ?Sized>(grid: &Grid<FireCell>, rng: &mut R) -> Grid<FireCell> {
    grid.map(|row, col, cell| match cell {
        FireCell::Burning => FireCell::Empty,
        FireCell::Tree => {
            let exposed = grid
                .von_neumann_neighbors(row, col)
                .any(|n| n == FireCell::Burning);
            if exposed || rng.chance(LIGHTNING_PROB) {
                FireCell::Burning
            } else {
                FireCell::Tree
            }
        }
        FireCell::Empty => {
            if rng.chance(GROW_PROB) { FireCell::Tree } else { FireCell::Empty }
        }
    })
}

pub fn is_burning(grid: &Grid<FireCell>) -> bool {
    grid.any(|c| c == FireCell::Burning)
}

/// Keeps the forest alight: when nothing burns, returns a copy with one
/// uniformly chosen tree set burning. `None` when something already burns
/// or when there is no tree to light.
pub fn ignite<R: RandomSource + ?Sized>(grid: &Grid<FireCell>, rng: &mut R) -> Option<Grid<FireCell>> {
    if is_burning(grid) {
        return None;
    }

    let dims = grid.dims();
    let mut target = None;
    for _ in 0..MAX_IGNITION_ATTEMPTS {
        let row = rng.index_below(dims.rows);
        let col = rng.index_below(dims.cols);
        if grid.get(row, col) == FireCell::Tree {
            target = Some((row, col));
            break;
        }
    }

    // Sparse forest: pick among the trees that exist
    if target.is_none() {
        let trees: Vec<(usize, usize)> = grid
            .cells()
            .filter(|&(_, _, c)| c == FireCell::Tree)
            .map(|(r, c, _)| (r, c))
            .collect();
        if trees.is_empty() {
            debug!(%dims, "no tree to ignite; skipping");
            return None;
        }
        target = Some(trees[rng.index_below(trees.len())]);
    }

    let (row, col) = target?;
    let mut next = grid.clone();
    next.set(row, col, FireCell::Burning);
    trace!(row, col, "ignited tree");
    Some(next)
}

/// Fire has no counters; its only extra behaviour is the ignition watchdog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fire;

impl Automaton for Fire {
    type Cell = FireCell;

    const NAME: &'static str = "Fire Spread";

    fn seed<R: RandomSource + ?Sized>(&mut self, dims: Dimensions, rng: &mut R) -> Grid<FireCell> {
        seed(dims, rng)
    }

    fn advance<R: RandomSource + ?Sized>(&mut self, grid: &Grid<FireCell>, rng: &mut R) -> Advance<FireCell> {
        Advance::Replaced(next_generation(grid, rng))
    }

    fn watchdog<R: RandomSource + ?Sized>(&self, grid: &Grid<FireCell>, rng: &mut R) -> Option<Grid<FireCell>> {
        ignite(grid, rng)
    }
}
