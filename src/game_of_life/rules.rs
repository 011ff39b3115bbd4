//! Conway's B3/S23 rule on a bounded grid

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Count living cells in the Moore neighborhood of `(row, col)`.
    ///
    /// Neighbor coordinates outside the grid are skipped, so edge cells have
    /// fewer than eight candidates. The result is in `[0, 8]`.
    pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let side = grid.side_length() as isize;
        assert!(
            (row as isize) < side && (col as isize) < side,
            "Coordinates ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            side,
            side
        );

        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r < 0 || c < 0 || r >= side || c >= side {
                    continue;
                }

                if grid.is_alive(r as usize, c as usize) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Next state of a cell given its current state and neighbor count
    pub fn next_state(alive: bool, neighbor_count: u8) -> bool {
        match (alive, neighbor_count) {
            (_, 3) => true,    // birth or survival
            (true, 2) => true, // survival
            _ => false,        // under- or overpopulation
        }
    }

    /// Compute the next generation into a freshly allocated grid
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.blank_like();
        Self::evolve_into(current, &mut next);
        next
    }

    /// Compute the next generation of `current` into `next`.
    ///
    /// `current` is only read and `next` is only written, so no cell sees a
    /// neighbor that was already updated this generation. Rows are computed
    /// in parallel; each worker owns exactly one output row.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in side length.
    pub fn evolve_into(current: &Grid, next: &mut Grid) {
        assert_eq!(
            current.side_length(),
            next.side_length(),
            "Back buffer must match the current grid size"
        );

        let side = current.side_length();

        next.cells_mut()
            .par_chunks_mut(side)
            .enumerate()
            .for_each(|(row, out_row)| {
                for (col, cell) in out_row.iter_mut().enumerate() {
                    let neighbors = Self::count_alive_neighbors(current, row, col);
                    cell.set_alive(Self::next_state(current.is_alive(row, col), neighbors));
                }
            });
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_alive(side: usize) -> Grid {
        Grid::from_rows(vec![vec![true; side]; side]).unwrap()
    }

    #[test]
    fn test_neighbor_counting_excludes_edges() {
        let grid = all_alive(3);

        assert_eq!(LifeRules::count_alive_neighbors(&grid, 1, 1), 8);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 0, 0), 3);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 2, 2), 3);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 0, 1), 5);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 1, 2), 5);
    }

    #[test]
    fn test_neighbor_counting_ignores_self() {
        let grid = Grid::from_pattern(3, [(1, 1)]).unwrap();
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 1, 1), 0);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = all_alive(1);
        assert_eq!(LifeRules::count_alive_neighbors(&grid, 0, 0), 0);
        assert!(LifeRules::evolve(&grid).is_empty());
    }

    #[test]
    fn test_rule_logic() {
        for count in 0..=8u8 {
            let survives = LifeRules::next_state(true, count);
            let born = LifeRules::next_state(false, count);

            assert_eq!(survives, count == 2 || count == 3, "alive with {count}");
            assert_eq!(born, count == 3, "dead with {count}");
        }
    }

    #[test]
    fn test_still_life_block() {
        let grid = Grid::from_pattern(4, [(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let evolved = LifeRules::evolve(&grid);
        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = Grid::from_pattern(3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        let vertical = Grid::from_pattern(3, [(0, 1), (1, 1), (2, 1)]).unwrap();

        let evolved = LifeRules::evolve(&horizontal);
        assert_eq!(evolved, vertical);

        let evolved_twice = LifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, horizontal);
    }

    #[test]
    fn test_result_does_not_depend_on_traversal_order() {
        let grid = Grid::from_pattern(6, [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2), (4, 4)]).unwrap();

        // Column-major pass over the same snapshot
        let side = grid.side_length();
        let mut column_major = Vec::new();
        for col in 0..side {
            for row in 0..side {
                let neighbors = LifeRules::count_alive_neighbors(&grid, row, col);
                if LifeRules::next_state(grid.is_alive(row, col), neighbors) {
                    column_major.push((row, col));
                }
            }
        }
        column_major.sort();

        assert_eq!(LifeRules::evolve(&grid).living_cells(), column_major);
    }

    #[test]
    fn test_evolve_into_overwrites_back_buffer() {
        let grid = Grid::from_pattern(3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        let mut back = all_alive(3);

        LifeRules::evolve_into(&grid, &mut back);
        assert_eq!(back.living_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "Back buffer")]
    fn test_evolve_into_rejects_mismatched_buffers() {
        let grid = Grid::dead(3).unwrap();
        let mut back = Grid::dead(4).unwrap();
        LifeRules::evolve_into(&grid, &mut back);
    }

    #[test]
    fn test_evolve_generations() {
        let grid = Grid::from_pattern(5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        assert_eq!(LifeRules::evolve_generations(grid.clone(), 2), grid);
        assert_ne!(LifeRules::evolve_generations(grid.clone(), 3), grid);
    }
}
