// render.rs - Cell palettes and the painting collaborator

use std::fmt;

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(level: u8) -> Self {
        Self(level, level, level)
    }
}

/// A cell state with a fixed colour. Every state is listed in `ALL`, in
/// display order.
pub trait Cell: Copy + PartialEq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn colour(self) -> Rgb;

    fn label(self) -> &'static str;
}

/// Paints a grid snapshot. Called once after every step, reset and resize.
pub trait Renderer {
    fn render<C: Cell>(&mut self, grid: &Grid<C>);
}

impl<D: Renderer + ?Sized> Renderer for &mut D {
    fn render<C: Cell>(&mut self, grid: &Grid<C>) {
        (**self).render(grid)
    }
}

/// Cells per state, in `Cell::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census<C: 'static> {
    pub counts: Vec<(C, usize)>,
    pub total: usize,
}

impl<C: Cell> Census<C> {
    pub fn of(grid: &Grid<C>) -> Self {
        let counts = C::ALL
            .iter()
            .map(|&state| (state, grid.count(|c| c == state)))
            .collect();
        Self { counts, total: grid.dims().area() }
    }

    pub fn get(&self, state: C) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == state)
            .map_or(0, |&(_, n)| n)
    }

    pub fn percent(&self, state: C) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.get(state) as f32 * 100.0 / self.total as f32
    }
}

impl<C: Cell> fmt::Display for Census<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (state, n)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", state.label(), n)?;
        }
        Ok(())
    }
}
