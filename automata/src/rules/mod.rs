// rules - The three rule sets and the per-model bookkeeping around them

pub mod fire;
pub mod life;
pub mod sir;

use crate::grid::{Dimensions, Grid};
use crate::random::RandomSource;
use crate::render::Cell;

pub use fire::{Fire, FireCell};
pub use life::Life;
pub use sir::{Sir, SirCell};

/// Outcome of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance<C> {
    /// A brand-new buffer to swap in.
    Replaced(Grid<C>),
    /// Nothing changed; keep the current buffer.
    FixedPoint,
}

/// A rule set plus whatever auxiliary state its controller keeps.
///
/// The transition functions themselves live as free functions in each
/// module (`life::next_generation`, ...) so they can be tested without any
/// bookkeeping attached.
pub trait Automaton {
    type Cell: Cell;

    const NAME: &'static str;

    /// Builds the initial grid and resets auxiliary state.
    fn seed<R: RandomSource + ?Sized>(&mut self, dims: Dimensions, rng: &mut R) -> Grid<Self::Cell>;

    /// Computes the next generation from a read-only view of the current one.
    fn advance<R: RandomSource + ?Sized>(&mut self, grid: &Grid<Self::Cell>, rng: &mut R) -> Advance<Self::Cell>;

    /// Invariant upkeep run on start and after every generation. Returns a
    /// replacement buffer when it had to intervene.
    fn watchdog<R: RandomSource + ?Sized>(&self, _grid: &Grid<Self::Cell>, _rng: &mut R) -> Option<Grid<Self::Cell>> {
        None
    }
}

/// Model picker for hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Life,
    Fire,
    Sir,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Life, ModelKind::Fire, ModelKind::Sir];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Life => Life::NAME,
            ModelKind::Fire => Fire::NAME,
            ModelKind::Sir  => Sir::NAME,
        }
    }
}
