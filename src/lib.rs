//! Bounded Game of Life
//!
//! Conway's Game of Life on a hard-edged N×N grid, with a double-buffered
//! transition engine, pluggable renderers and a frame-paced terminal host.

pub mod config;
pub mod game_of_life;
pub mod host;
pub mod render;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, Simulation, TransitionEngine};

use anyhow::{Context, Result};
use game_of_life::load_pattern_from_file;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the starting grid described by the settings.
///
/// A pattern file wins over a preset, and either wins over random seeding.
/// Patterns are centered in the grid.
pub fn initial_grid(settings: &Settings) -> Result<Grid> {
    let side_length = settings.grid.side_length;

    let pattern = match (&settings.grid.pattern_file, settings.grid.preset) {
        (Some(path), _) => Some(load_pattern_from_file(path)?),
        (None, Some(preset)) => Some(preset.pattern()),
        (None, None) => None,
    };

    if let Some(pattern) = pattern {
        info!("Seeding from pattern '{}'", pattern.name());
        let grid = pattern
            .centered_in(side_length)
            .and_then(|centered| centered.to_grid(side_length))
            .with_context(|| format!("Pattern '{}' does not fit the grid", pattern.name()))?;
        return Ok(grid);
    }

    let probability = settings.grid.seed_probability;
    let grid = match settings.grid.rng_seed {
        Some(seed) => {
            Grid::random_with_rng(side_length, probability, &mut StdRng::seed_from_u64(seed))
        }
        None => Grid::random(side_length, probability),
    }
    .context("Failed to create grid")?;

    Ok(grid)
}

/// Build a simulation from settings, honoring the start-paused flag
pub fn build_simulation(settings: &Settings) -> Result<Simulation> {
    let grid = initial_grid(settings)?;
    let engine = if settings.playback.start_paused {
        TransitionEngine::paused()
    } else {
        TransitionEngine::new()
    };
    Ok(Simulation::new(grid, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life::Preset;

    #[test]
    fn test_initial_grid_from_preset() {
        let mut settings = Settings::default();
        settings.grid.side_length = 5;
        settings.grid.preset = Some(Preset::Blinker);

        let grid = initial_grid(&settings).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_initial_grid_seeded_is_reproducible() {
        let mut settings = Settings::default();
        settings.grid.side_length = 30;
        settings.grid.rng_seed = Some(7);

        assert_eq!(
            initial_grid(&settings).unwrap(),
            initial_grid(&settings).unwrap()
        );
    }

    #[test]
    fn test_pattern_too_large() {
        let mut settings = Settings::default();
        settings.grid.side_length = 2;
        settings.grid.preset = Some(Preset::Glider);
        assert!(initial_grid(&settings).is_err());
    }

    #[test]
    fn test_build_simulation_paused() {
        let mut settings = Settings::default();
        settings.grid.side_length = 8;
        settings.playback.start_paused = true;

        let sim = build_simulation(&settings).unwrap();
        assert!(!sim.is_running());
        assert_eq!(sim.generation(), 0);
    }
}
