//! Text renderer for ANSI terminals

use super::{FrameStatus, Renderer};
use crate::config::DisplayStyle;
use crate::game_of_life::Grid;
use crate::utils::{ColorOutput, GridFormatter};
use anyhow::{Context, Result};
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct TerminalRenderer<W: Write> {
    out: W,
    style: DisplayStyle,
    clear_screen: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout(style: DisplayStyle) -> Self {
        Self::new(std::io::stdout(), style)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, style: DisplayStyle) -> Self {
        Self {
            out,
            style,
            clear_screen: true,
        }
    }

    /// Keep previous frames on screen instead of redrawing in place
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn status_line(status: &FrameStatus) -> String {
        let mode = if status.running {
            ColorOutput::success("running")
        } else {
            ColorOutput::warning("paused")
        };
        format!(
            "Generation {} | Living: {} | {} | [enter] pause/resume  [s] step  [q] quit",
            status.generation, status.living_cells, mode
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, status: &FrameStatus) -> Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&GridFormatter::format(grid, self.style));
        frame.push_str(&Self::status_line(status));
        frame.push('\n');

        self.out
            .write_all(frame.as_bytes())
            .context("Failed to write frame to terminal")?;
        self.out.flush().context("Failed to flush terminal")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_contents() {
        let grid = Grid::from_pattern(2, [(1, 1)]).unwrap();
        let status = FrameStatus {
            generation: 4,
            running: false,
            living_cells: 1,
        };

        let mut renderer =
            TerminalRenderer::new(Vec::new(), DisplayStyle::Compact).without_clearing();
        renderer.render(&grid, &status).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with("··\n·█\n"));
        assert!(output.contains("Generation 4"));
        assert!(output.contains("paused"));
        assert!(!output.contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_clears_between_frames() {
        let grid = Grid::dead(1).unwrap();
        let status = FrameStatus {
            generation: 0,
            running: true,
            living_cells: 0,
        };

        let mut renderer = TerminalRenderer::new(Vec::new(), DisplayStyle::Compact);
        renderer.render(&grid, &status).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with(CLEAR_SCREEN));
    }
}
