//! Renderers consuming per-cell alive/dead state

pub mod quad;
pub mod terminal;

pub use quad::{Quad, QuadLayout, VertexBatchRenderer};
pub use terminal::TerminalRenderer;

use crate::game_of_life::{Grid, Simulation};
use anyhow::Result;

/// What the host knows about the frame being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStatus {
    pub generation: u64,
    pub running: bool,
    pub living_cells: usize,
}

impl FrameStatus {
    pub fn capture(simulation: &Simulation) -> Self {
        Self {
            generation: simulation.generation(),
            running: simulation.is_running(),
            living_cells: simulation.grid().living_count(),
        }
    }
}

/// Draws one frame of the current generation
pub trait Renderer {
    fn render(&mut self, grid: &Grid, status: &FrameStatus) -> Result<()>;
}
