//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod pattern;
pub mod rules;

pub use engine::{Simulation, TransitionEngine};
pub use grid::{Cell, Grid, GridError};
pub use io::{
    create_example_patterns, load_grid_from_file, load_pattern_from_file, save_grid_to_file,
    GridSnapshot,
};
pub use pattern::{Pattern, Preset};
pub use rules::LifeRules;
