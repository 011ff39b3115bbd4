//! Seed patterns for deterministic starts

use super::{Grid, GridError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Built-in seed patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Blinker,
    Block,
    Glider,
    Beacon,
}

impl Preset {
    pub fn all() -> [Preset; 4] {
        [Preset::Blinker, Preset::Block, Preset::Glider, Preset::Beacon]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Blinker => "blinker",
            Preset::Block => "block",
            Preset::Glider => "glider",
            Preset::Beacon => "beacon",
        }
    }

    pub fn pattern(self) -> Pattern {
        let cells = match self {
            Preset::Blinker => vec![(0, 0), (0, 1), (0, 2)],
            Preset::Block => vec![(0, 0), (0, 1), (1, 0), (1, 1)],
            Preset::Glider => vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
            Preset::Beacon => vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
        };
        Pattern::new(self.name(), cells)
    }
}

/// A named set of living cell offsets, anchored at `(0, 0)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    name: String,
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, mut cells: Vec<(usize, usize)>) -> Self {
        cells.sort_unstable();
        cells.dedup();
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Rows spanned by the pattern's bounding box
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern's bounding box
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Translate every cell by `(row, col)`
    pub fn offset(&self, row: usize, col: usize) -> Pattern {
        Pattern {
            name: self.name.clone(),
            cells: self.cells.iter().map(|&(r, c)| (r + row, c + col)).collect(),
        }
    }

    /// Translate the pattern so its bounding box sits in the middle of an N×N grid
    pub fn centered_in(&self, side_length: usize) -> Result<Pattern, GridError> {
        if side_length == 0 {
            return Err(GridError::ZeroSideLength);
        }
        if self.height() > side_length || self.width() > side_length {
            return Err(GridError::PatternOutOfBounds {
                row: self.height().saturating_sub(1),
                col: self.width().saturating_sub(1),
                side_length,
            });
        }

        Ok(self.offset(
            (side_length - self.height()) / 2,
            (side_length - self.width()) / 2,
        ))
    }

    /// Seed an N×N grid with this pattern at its current offsets
    pub fn to_grid(&self, side_length: usize) -> Result<Grid, GridError> {
        Grid::from_pattern(side_length, self.cells.iter().copied())
    }
}
