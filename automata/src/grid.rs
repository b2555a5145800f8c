// grid.rs - Bounded 2D cell buffers shared by every rule set

use std::fmt;

use thiserror::Error;

pub const MIN_SIDE: usize = 10;                       // Smallest accepted rows/cols
pub const MAX_SIDE: usize = 200;                      // Largest accepted rows/cols
pub const DEFAULT_SIDE: usize = 50;                   // Start-up rows/cols
pub const FALLBACK_SIDE: usize = 10;                  // Used when an input cannot be parsed

/// Grid shape. Both sides are always within `MIN_SIDE..=MAX_SIDE` when built
/// through [`Dimensions::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn clamped(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.clamp(MIN_SIDE, MAX_SIDE),
            cols: cols.clamp(MIN_SIDE, MAX_SIDE),
        }
    }

    pub fn area(self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { rows: DEFAULT_SIDE, cols: DEFAULT_SIDE }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must contain at least one row and one column")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, actual: usize },
}

// Offsets of the up to 8 Moore neighbours
const MOORE: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

// Offsets of the up to 4 von Neumann neighbours
const VON_NEUMANN: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Row-major cell buffer. The shape is fixed for the lifetime of the value;
/// a new shape means a new `Grid`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dims: Dimensions,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(dims: Dimensions, fill: T) -> Self {
        Self { dims, cells: vec![fill; dims.area()] }
    }

    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(dims.area());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                cells.push(f(row, col));
            }
        }
        Self { dims, cells }
    }

    /// Builds a grid from nested rows. The shape is taken as given, so this
    /// is the one way to get a grid smaller than `MIN_SIDE`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != expected {
                return Err(GridError::Ragged { row, expected, actual: values.len() });
            }
            cells.extend_from_slice(values);
        }

        let dims = Dimensions { rows: rows.len(), cols: expected };
        Ok(Self { dims, cells })
    }

    /// Fresh buffer of the same shape, every cell set to `fill`.
    pub fn clone_shape<U: Copy>(&self, fill: U) -> Grid<U> {
        Grid::new(self.dims, fill)
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Builds the next buffer cell by cell. `f` sees this (frozen) grid, so
    /// no cell ever observes a sibling that was already updated.
    pub fn map(&self, mut f: impl FnMut(usize, usize, T) -> T) -> Self {
        Grid::from_fn(self.dims, |row, col| f(row, col, self.get(row, col)))
    }

    pub fn moore_neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = T> + '_ {
        self.neighbors(row, col, &MOORE)
    }

    pub fn von_neumann_neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = T> + '_ {
        self.neighbors(row, col, &VON_NEUMANN)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().copied()
    }

    /// `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.dims.cols;
        self.cells.iter().enumerate().map(move |(i, &v)| (i / cols, i % cols, v))
    }

    pub fn count(&self, mut pred: impl FnMut(T) -> bool) -> usize {
        self.cells.iter().filter(|&&v| pred(v)).count()
    }

    pub fn any(&self, mut pred: impl FnMut(T) -> bool) -> bool {
        self.cells.iter().any(|&v| pred(v))
    }

    // Out-of-range neighbours are skipped: no wraparound
    fn neighbors<'a>(
        &'a self,
        row: usize,
        col: usize,
        offsets: &'static [(isize, isize)],
    ) -> impl Iterator<Item = T> + 'a {
        offsets.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            self.dims.contains(nr, nc).then(|| self.get(nr, nc))
        })
    }
}

impl<T> Grid<T> {
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.dims.contains(row, col),
            "cell ({row}, {col}) outside {} grid",
            self.dims
        );
        row * self.dims.cols + col
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("dims", &self.dims)
            .field("rows", &self.cells.chunks(self.dims.cols.max(1)).collect::<Vec<_>>())
            .finish()
    }
}
