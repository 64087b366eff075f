//! Rendering seam
//!
//! The simulation never draws. Each frame it produces an ordered list of
//! [`DrawCommand`]s and hands them to whatever [`Renderer`] the front end supplies.

pub mod shapes;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Position};
pub use shapes::{APPLE_COLOR, BACKGROUND_COLOR, PixelRect, Rgba, SNAKE_COLOR, frame_commands};
pub use text::TextRenderer;

/// One request to the external renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: Rgba },
    /// Fill one grid cell
    FillCell {
        cell: Position,
        rect: PixelRect,
        color: Rgba,
    },
    /// Flush the finished frame
    Present,
}

/// Sink for draw commands (window, terminal, test recorder)
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);
}

/// Submit one full frame for `state`
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, cell_size: u32, renderer: &mut R) {
    for command in frame_commands(state, cell_size) {
        renderer.draw(&command);
    }
}

/// Renderer that keeps every command it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Present` commands seen
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(*command);
    }
}
