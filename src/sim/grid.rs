//! Grid geometry
//!
//! Integer cell coordinates with the origin at the top-left corner; `y` grows downward,
//! matching the pixel space of the external renderer.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GRID_SIDE, MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// A cell coordinate on the grid
pub type Position = IVec2;

/// Steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order starting at `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step for one cell of movement
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// True if turning from `self` to `other` would be a 180° reversal
    #[inline]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Finite playing field of `width` × `height` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid, clamping each dimension into the playable range
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.clamp(MIN_GRID_WIDTH, MAX_GRID_SIDE),
            height: height.clamp(MIN_GRID_HEIGHT, MAX_GRID_SIDE),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check whether a position lies inside `[0, width) × [0, height)`
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        // Deserialized grids skip the clamp in `new`
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Center cell (rounded toward the origin)
    pub fn center(&self) -> Position {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| IVec2::new(x, y)))
    }
}
