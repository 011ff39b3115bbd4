//! Generation stepping and the running/paused mode

use super::{Grid, LifeRules};
use log::{debug, info};
use std::mem;

/// Owns the play/pause mode and the generation counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEngine {
    running: bool,
    generation: u64,
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionEngine {
    /// A running engine at generation zero
    pub fn new() -> Self {
        Self {
            running: true,
            generation: 0,
        }
    }

    /// A paused engine at generation zero
    pub fn paused() -> Self {
        Self {
            running: false,
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip between running and paused, returning the new mode
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!(
            "Simulation {} at generation {}",
            if self.running { "resumed" } else { "paused" },
            self.generation
        );
        self.running
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation into a new grid.
    ///
    /// Runs regardless of mode; use [`TransitionEngine::tick`] for the
    /// mode-gated step.
    pub fn advance(&mut self, current: &Grid) -> Grid {
        let next = LifeRules::evolve(current);
        self.record_generation(&next);
        next
    }

    /// Compute the next generation of `current` into the back buffer `next`
    pub fn advance_into(&mut self, current: &Grid, next: &mut Grid) {
        LifeRules::evolve_into(current, next);
        self.record_generation(next);
    }

    /// Advance only while running
    pub fn tick(&mut self, current: &Grid) -> Option<Grid> {
        if self.running {
            Some(self.advance(current))
        } else {
            None
        }
    }

    fn record_generation(&mut self, next: &Grid) {
        self.generation += 1;
        debug!(
            "Generation {}: {} living cells",
            self.generation,
            next.living_count()
        );
    }
}

/// Current grid plus a pre-allocated back buffer, swapped every generation
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    back: Grid,
    engine: TransitionEngine,
}

impl Simulation {
    pub fn new(grid: Grid, engine: TransitionEngine) -> Self {
        let back = grid.blank_like();
        Self {
            current: grid,
            back,
            engine,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn toggle_running(&mut self) -> bool {
        self.engine.toggle_running()
    }

    pub fn set_running(&mut self, running: bool) {
        self.engine.set_running(running);
    }

    /// Advance one generation regardless of mode
    pub fn step(&mut self) {
        self.engine.advance_into(&self.current, &mut self.back);
        mem::swap(&mut self.current, &mut self.back);
    }

    /// Advance one generation if running; returns whether it advanced
    pub fn tick(&mut self) -> bool {
        if self.engine.is_running() {
            self.step();
            true
        } else {
            false
        }
    }

    /// Consume the simulation, returning the current grid
    pub fn into_grid(self) -> Grid {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_5x5() -> Grid {
        Grid::from_pattern(5, [(2, 1), (2, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_advance_counts_generations() {
        let mut engine = TransitionEngine::new();
        let grid = blinker_5x5();

        let next = engine.advance(&grid);
        assert_eq!(engine.generation(), 1);
        assert_eq!(next.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        engine.advance(&next);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut engine = TransitionEngine::paused();
        let grid = blinker_5x5();

        assert!(engine.tick(&grid).is_none());
        assert_eq!(engine.generation(), 0);

        assert!(engine.toggle_running());
        assert!(engine.tick(&grid).is_some());
        assert_eq!(engine.generation(), 1);

        assert!(!engine.toggle_running());
        assert!(!engine.is_running());
    }

    #[test]
    fn test_simulation_swaps_buffers() {
        let mut sim = Simulation::new(blinker_5x5(), TransitionEngine::new());

        sim.step();
        assert_eq!(sim.grid().living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(sim.grid().cell_count(), 25);

        sim.step();
        assert_eq!(sim.grid(), &blinker_5x5());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_simulation_tick_when_paused() {
        let mut sim = Simulation::new(blinker_5x5(), TransitionEngine::paused());

        assert!(!sim.tick());
        assert_eq!(sim.grid(), &blinker_5x5());

        sim.set_running(true);
        assert!(sim.tick());
        assert_eq!(sim.generation(), 1);
    }
}
