//! Display and output formatting utilities

use crate::config::DisplayStyle;
use crate::game_of_life::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in the requested style
    pub fn format(grid: &Grid, style: DisplayStyle) -> String {
        match style {
            DisplayStyle::Compact => Self::format_grid_compact(grid),
            DisplayStyle::Coords => Self::format_grid_with_coords(grid),
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let side = grid.side_length();
        let mut output = String::with_capacity(side * (side + 1) * 3);

        grid.for_each_cell(|_, col, alive| {
            output.push(if alive { '█' } else { '·' });
            if col + 1 == side {
                output.push('\n');
            }
        });

        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let side = grid.side_length();
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..side {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        grid.for_each_cell(|row, col, alive| {
            if col == 0 {
                output.push_str(&format!("{:2} ", row));
            }
            output.push_str(if alive { "██" } else { "··" });
            if col + 1 == side {
                output.push('\n');
            }
        });

        output
    }

    /// One-line summary of a grid at a generation
    pub fn format_summary(grid: &Grid, generation: u64) -> String {
        let total = grid.cell_count();
        let living = grid.living_count();
        format!(
            "Generation {} | {}x{} | Living: {} ({:.1}%)",
            generation,
            grid.side_length(),
            grid.side_length(),
            living,
            (living as f64 / total as f64) * 100.0
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}
