//! File I/O for patterns and grid snapshots

use super::{Grid, Pattern, Preset};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parse a pattern from text.
/// Format: each line is a row, '1' for alive cells and '0' for dead cells.
/// Rows may differ in length; blank lines are skipped.
pub fn parse_pattern(content: &str, name: &str) -> Result<Pattern> {
    let rows = parse_rows(content)?;

    let cells = rows
        .iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(col, _)| (row, col))
        })
        .collect();

    Ok(Pattern::new(name, cells))
}

/// Parse a full N×N grid from text in the same format as patterns
pub fn parse_grid(content: &str) -> Result<Grid> {
    let rows = parse_rows(content)?;
    Ok(Grid::from_rows(rows)?)
}

fn parse_rows(content: &str) -> Result<Vec<Vec<bool>>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Load a pattern from a text file, named after the file stem
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    parse_pattern(&content, name)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.display()))
}

/// Load a square grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;

    parse_grid(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.display()))
}

/// Convert a grid to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let side = grid.side_length();
    let mut result = String::with_capacity(side * (side + 1));

    grid.for_each_cell(|_, col, alive| {
        result.push(if alive { '1' } else { '0' });
        if col + 1 == side {
            result.push('\n');
        }
    });

    result
}

/// Save a grid to a text file, creating parent directories
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    write_creating_parents(path.as_ref(), &grid_to_string(grid))
}

fn write_creating_parents(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// JSON-friendly snapshot of a grid at a given generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub side_length: usize,
    pub generation: u64,
    pub living_cells: Vec<(usize, usize)>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid, generation: u64) -> Self {
        Self {
            side_length: grid.side_length(),
            generation,
            living_cells: grid.living_cells(),
        }
    }

    /// Rebuild the grid this snapshot describes
    pub fn to_grid(&self) -> Result<Grid> {
        Ok(Grid::from_pattern(
            self.side_length,
            self.living_cells.iter().copied(),
        )?)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize grid snapshot")
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_creating_parents(path.as_ref(), &self.to_json()?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
    }
}

/// Write every built-in preset as a pattern file into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for preset in Preset::all() {
        let pattern = preset.pattern();
        let mut rows = vec![vec!['0'; pattern.width()]; pattern.height()];
        for &(row, col) in pattern.cells() {
            rows[row][col] = '1';
        }

        let content: String = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<String>() + "\n")
            .collect();

        let path = dir.join(format!("{}.txt", preset.name()));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
