//! Per-cell quads in normalized device coordinates.
//!
//! The simulation grid carries no graphics state. A GPU-backed host keeps a
//! [`QuadLayout`] instead: one quad per position, built once by walking the
//! grid, and each frame uploads the quads of the living cells.

use super::{FrameStatus, Renderer};
use crate::game_of_life::Grid;
use anyhow::Result;

/// Two triangles covering `[-0.5, 0.5]²`, three floats per vertex
const UNIT_SQUARE: [f32; 18] = [
    -0.5, 0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    -0.5, 0.5, 0.0, //
    0.5, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
];

pub const FLOATS_PER_VERTEX: usize = 3;

/// Vertex data for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [f32; 18],
}

impl Quad {
    /// Map the unit square onto the cell's slot in `[-1, 1]²`.
    ///
    /// The row drives the x axis and the column the y axis.
    pub fn for_cell(row: usize, col: usize, side_length: usize) -> Self {
        let size = 1.0 / side_length as f32;
        let mut vertices = UNIT_SQUARE;

        for (i, value) in vertices.iter_mut().enumerate() {
            let position = match i % FLOATS_PER_VERTEX {
                0 => row as f32 * size,
                1 => col as f32 * size,
                _ => continue,
            };

            *value = if *value < 0.0 {
                position * 2.0 - 1.0
            } else {
                (position + size) * 2.0 - 1.0
            };
        }

        Self { vertices }
    }
}

/// Position-indexed quads for every cell of an N×N grid
#[derive(Debug, Clone)]
pub struct QuadLayout {
    side_length: usize,
    quads: Vec<Quad>,
}

impl QuadLayout {
    pub fn for_grid(grid: &Grid) -> Self {
        let side_length = grid.side_length();
        let quads = grid
            .cells()
            .map(|(row, col, _)| Quad::for_cell(row, col, side_length))
            .collect();

        Self { side_length, quads }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn quad(&self, row: usize, col: usize) -> &Quad {
        assert!(
            row < self.side_length && col < self.side_length,
            "Coordinates ({}, {}) out of bounds for {}x{} layout",
            row,
            col,
            self.side_length,
            self.side_length
        );
        &self.quads[row * self.side_length + col]
    }

    /// Concatenated vertices of every living cell, ready for upload
    pub fn alive_vertices(&self, grid: &Grid) -> Vec<f32> {
        grid.cells()
            .filter(|&(_, _, alive)| alive)
            .flat_map(|(row, col, _)| self.quad(row, col).vertices)
            .collect()
    }
}

/// Headless renderer producing the vertex batch a GPU backend would draw
#[derive(Debug, Default)]
pub struct VertexBatchRenderer {
    layout: Option<QuadLayout>,
    batch: Vec<f32>,
    frames: u64,
    last_status: Option<FrameStatus>,
}

impl VertexBatchRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self) -> &[f32] {
        &self.batch
    }

    pub fn vertex_count(&self) -> usize {
        self.batch.len() / FLOATS_PER_VERTEX
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_status(&self) -> Option<FrameStatus> {
        self.last_status
    }
}

impl Renderer for VertexBatchRenderer {
    fn render(&mut self, grid: &Grid, status: &FrameStatus) -> Result<()> {
        let layout = match self.layout.take() {
            Some(layout) if layout.side_length() == grid.side_length() => layout,
            _ => QuadLayout::for_grid(grid),
        };

        self.batch = layout.alive_vertices(grid);
        self.layout = Some(layout);
        self.frames += 1;
        self.last_status = Some(*status);
        Ok(())
    }
}
