//! Draw-command generation for one frame

use serde::{Deserialize, Serialize};

use super::DrawCommand;
use crate::sim::{GameState, Position};

/// RGBA color, 8 bits per channel
pub type Rgba = [u8; 4];

pub const BACKGROUND_COLOR: Rgba = [0, 0, 0, 255];
pub const SNAKE_COLOR: Rgba = [0, 255, 0, 255];
pub const APPLE_COLOR: Rgba = [255, 0, 0, 255];

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Pixel rectangle covering one grid cell
#[inline]
pub fn cell_rect(cell: Position, cell_size: u32) -> PixelRect {
    let size = i32::try_from(cell_size).unwrap_or(i32::MAX);
    PixelRect {
        x: cell.x.saturating_mul(size),
        y: cell.y.saturating_mul(size),
        w: cell_size,
        h: cell_size,
    }
}

/// Commands for one frame, in submission order: background, snake head to tail, apple,
/// present.
pub fn frame_commands(state: &GameState, cell_size: u32) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.snake.len() + 3);

    commands.push(DrawCommand::Clear {
        color: BACKGROUND_COLOR,
    });

    for segment in state.snake.segments() {
        commands.push(DrawCommand::FillCell {
            cell: segment,
            rect: cell_rect(segment, cell_size),
            color: SNAKE_COLOR,
        });
    }

    commands.push(DrawCommand::FillCell {
        cell: state.apple,
        rect: cell_rect(state.apple, cell_size),
        color: APPLE_COLOR,
    });

    commands.push(DrawCommand::Present);
    commands
}
