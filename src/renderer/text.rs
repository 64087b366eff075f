//! Character-grid renderer for headless runs and logs

use super::shapes::{APPLE_COLOR, SNAKE_COLOR};
use super::{DrawCommand, Renderer};
use crate::sim::Grid;

const EMPTY: char = '.';
const SNAKE: char = 'o';
const APPLE: char = '*';
const OTHER: char = '#';

/// Rasterizes cell fills into one character per grid cell.
///
/// The buffer is built between `Clear` and `Present`; `frame()` returns the last presented one.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    grid: Grid,
    buffer: Vec<char>,
    frame: String,
    frames_presented: u64,
}

impl TextRenderer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            buffer: vec![EMPTY; grid.cell_count()],
            frame: String::new(),
            frames_presented: 0,
        }
    }

    /// Last presented frame, one line per grid row
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn present(&mut self) {
        let width = self.grid.width() as usize;
        self.frame.clear();
        for (i, row) in self.buffer.chunks(width).enumerate() {
            if i > 0 {
                self.frame.push('\n');
            }
            self.frame.extend(row.iter());
        }
        self.frames_presented += 1;
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Clear { .. } => self.buffer.fill(EMPTY),
            DrawCommand::FillCell { cell, color, .. } => {
                // Cells outside the grid are clipped
                if !self.grid.contains(cell) {
                    return;
                }
                let glyph = match color {
                    SNAKE_COLOR => SNAKE,
                    APPLE_COLOR => APPLE,
                    _ => OTHER,
                };
                let index = cell.y as usize * self.grid.width() as usize + cell.x as usize;
                self.buffer[index] = glyph;
            }
            DrawCommand::Present => self.present(),
        }
    }
}
