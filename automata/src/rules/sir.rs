// sir.rs - Susceptible / Infected / Recovered epidemic on a lattice

use crate::grid::{Dimensions, Grid};
use crate::random::RandomSource;
use crate::render::{Cell, Rgb};
use crate::rules::{Advance, Automaton};

pub const BETA: f64 = 0.3;                            // Infection probability given an infected neighbour
pub const GAMMA: f64 = 0.05;                          // Recovery probability per generation

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SirCell {
    Susceptible,
    Infected,
    Recovered,
}

impl Cell for SirCell {
    const ALL: &'static [Self] = &[SirCell::Susceptible, SirCell::Infected, SirCell::Recovered];

    fn colour(self) -> Rgb {
        match self {
            SirCell::Susceptible => Rgb(0x87, 0xce, 0xeb),
            SirCell::Infected    => Rgb(0xff, 0x45, 0x00),
            SirCell::Recovered   => Rgb(0x22, 0x8b, 0x22),
        }
    }

    fn label(self) -> &'static str {
        match self {
            SirCell::Susceptible => "Susceptible",
            SirCell::Infected    => "Infected",
            SirCell::Recovered   => "Recovered",
        }
    }
}

/// Everyone susceptible except one uniformly chosen patient zero.
pub fn seed<R: RandomSource + ?Sized>(dims: Dimensions, rng: &mut R) -> Grid<SirCell> {
    let mut grid = Grid::new(dims, SirCell::Susceptible);
    let row = rng.index_below(dims.rows);
    let col = rng.index_below(dims.cols);
    grid.set(row, col, SirCell::Infected);
    grid
}

/// One synchronous generation over the von Neumann neighbourhood.
/// Recovered is terminal.
pub fn next_generation<R: RandomSource + ?Sized>(grid: &Grid<SirCell>, rng: &mut R) -> Grid<SirCell> {
    grid.map(|row, col, cell| match cell {
        SirCell::Susceptible => {
            // No draw at all without an infected neighbour
            let exposed = grid
                .von_neumann_neighbors(row, col)
                .any(|n| n == SirCell::Infected);
            if exposed && rng.chance(BETA) {
                SirCell::Infected
            } else {
                SirCell::Susceptible
            }
        }
        SirCell::Infected => {
            if rng.chance(GAMMA) { SirCell::Recovered } else { SirCell::Infected }
        }
        SirCell::Recovered => SirCell::Recovered,
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sir;

impl Automaton for Sir {
    type Cell = SirCell;

    const NAME: &'static str = "SIR Epidemic";

    fn seed<R: RandomSource + ?Sized>(&mut self, dims: Dimensions, rng: &mut R) -> Grid<SirCell> {
        seed(dims, rng)
    }

    fn advance<R: RandomSource + ?Sized>(&mut self, grid: &Grid<SirCell>, rng: &mut R) -> Advance<SirCell> {
        Advance::Replaced(next_generation(grid, rng))
    }
}
