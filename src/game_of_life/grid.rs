//! Grid representation for the bounded Game of Life

use itertools::Itertools;
use log::debug;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing a grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Grid side length must be positive")]
    ZeroSideLength,

    #[error("Seed probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("Pattern cell ({row}, {col}) does not fit a {side_length}x{side_length} grid")]
    PatternOutOfBounds {
        row: usize,
        col: usize,
        side_length: usize,
    },

    #[error("Row {row} has length {len}, expected {expected} (grids must be square)")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A single automaton site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}

/// Square N×N grid of cells stored in row-major order.
///
/// The side length is fixed once the grid exists. Neighbors beyond the
/// edges do not exist; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side_length: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn dead(side_length: usize) -> Result<Self, GridError> {
        if side_length == 0 {
            return Err(GridError::ZeroSideLength);
        }
        Ok(Self::blank(side_length))
    }

    /// Create a grid where each cell is independently alive with `seed_probability`,
    /// using the thread-local RNG
    pub fn random(side_length: usize, seed_probability: f64) -> Result<Self, GridError> {
        Self::random_with_rng(side_length, seed_probability, &mut rand::rng())
    }

    /// Create a randomly seeded grid drawing from the given RNG.
    ///
    /// For each cell a uniform value in `[0, 1)` is drawn and the cell is
    /// alive when that value is below `seed_probability`.
    pub fn random_with_rng<R: Rng + ?Sized>(
        side_length: usize,
        seed_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(side_length)?;

        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&seed_probability) {
            return Err(GridError::InvalidProbability(seed_probability));
        }

        for cell in &mut grid.cells {
            cell.alive = rng.random::<f64>() < seed_probability;
        }

        debug!(
            "Seeded {}x{} grid with p={} ({} living cells)",
            side_length,
            side_length,
            seed_probability,
            grid.living_count()
        );
        Ok(grid)
    }

    /// Create a grid where only the listed coordinates are alive
    pub fn from_pattern<I>(side_length: usize, pattern: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::dead(side_length)?;

        for (row, col) in pattern {
            if row >= side_length || col >= side_length {
                return Err(GridError::PatternOutOfBounds {
                    row,
                    col,
                    side_length,
                });
            }
            let idx = grid.index(row, col);
            grid.cells[idx].alive = true;
        }

        Ok(grid)
    }

    /// Create a grid from square rows of booleans
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let side_length = rows.len();
        let mut grid = Self::dead(side_length)?;

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != side_length {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: side_length,
                });
            }
            for (col, alive) in values.into_iter().enumerate() {
                let idx = grid.index(row, col);
                grid.cells[idx].alive = alive;
            }
        }

        Ok(grid)
    }

    /// A dead grid with the same side length, used as a back buffer
    pub(crate) fn blank_like(&self) -> Self {
        Self::blank(self.side_length)
    }

    fn blank(side_length: usize) -> Self {
        let cells = (0..side_length)
            .cartesian_product(0..side_length)
            .map(|(row, col)| Cell {
                row,
                col,
                alive: false,
            })
            .collect();

        Self { side_length, cells }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Total number of cells (always N×N)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Convert 2D coordinates to the row-major index.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is outside `[0, N)`.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side_length && col < self.side_length,
            "Coordinates ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.side_length,
            self.side_length
        );
        row * self.side_length + col
    }

    /// Get the cell at coordinates. Panics when out of range.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Whether the cell at coordinates is alive. Panics when out of range.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    /// Lazy row-major traversal over `(row, col, alive)` triples
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().map(|cell| (cell.row, cell.col, cell.alive))
    }

    /// Visit every cell in row-major order
    pub fn for_each_cell<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, usize, bool),
    {
        for (row, col, alive) in self.cells() {
            visitor(row, col, alive);
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.alive)
            .map(Cell::position)
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.alive)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side_length) {
            for cell in row {
                let symbol = if cell.alive { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::dead(3).unwrap();
        assert_eq!(grid.side_length(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cells_know_their_position() {
        let grid = Grid::dead(4).unwrap();
        let cell = grid.cell_at(2, 3);
        assert_eq!(cell.position(), (2, 3));
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_invalid_configuration() {
        assert_eq!(Grid::dead(0), Err(GridError::ZeroSideLength));
        assert_eq!(Grid::random(0, 0.5), Err(GridError::ZeroSideLength));
        assert_eq!(
            Grid::random(5, 1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert_eq!(
            Grid::random(5, -0.1),
            Err(GridError::InvalidProbability(-0.1))
        );
        assert!(matches!(
            Grid::random(5, f64::NAN),
            Err(GridError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_probability_extremes() {
        let empty = Grid::random(10, 0.0).unwrap();
        assert!(empty.is_empty());

        let full = Grid::random(10, 1.0).unwrap();
        assert_eq!(full.living_count(), 100);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = Grid::random_with_rng(20, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random_with_rng(20, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_pattern() {
        let grid = Grid::from_pattern(5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        assert_eq!(grid.living_count(), 3);
        assert!(grid.is_alive(2, 1));
        assert!(!grid.is_alive(1, 2));

        assert_eq!(
            Grid::from_pattern(3, [(3, 0)]),
            Err(GridError::PatternOutOfBounds {
                row: 3,
                col: 0,
                side_length: 3
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.side_length(), 3);
        assert_eq!(grid.living_count(), 5);

        let ragged = vec![vec![true, false], vec![true]];
        assert!(matches!(
            Grid::from_rows(ragged),
            Err(GridError::NotSquare { row: 1, .. })
        ));
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::ZeroSideLength));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_range_access_panics() {
        let grid = Grid::dead(3).unwrap();
        grid.is_alive(0, 3);
    }

    #[test]
    fn test_traversal_is_row_major_and_repeatable() {
        let grid = Grid::from_pattern(2, [(0, 1), (1, 0)]).unwrap();

        let first: Vec<_> = grid.cells().collect();
        assert_eq!(
            first,
            vec![(0, 0, false), (0, 1, true), (1, 0, true), (1, 1, false)]
        );

        let mut visited = Vec::new();
        grid.for_each_cell(|row, col, alive| visited.push((row, col, alive)));
        assert_eq!(first, visited);
        assert_eq!(first, grid.cells().collect::<Vec<_>>());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_pattern(2, [(0, 0)]).unwrap();
        assert_eq!(grid.to_string(), "⬛⬜\n⬜⬜\n");
    }
}
