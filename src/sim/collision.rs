//! Collision detection for the snake's head
//!
//! Both checks run against the snake *after* it has moved. Either one ends the run;
//! the cause is kept so the front end can report it, but the reset is identical.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Position};
use super::snake::SnakeBody;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Head is on a free, in-bounds cell
    NoCollision,
    /// Head landed on one of its own segments
    SelfCollision,
    /// Head left the grid
    Boundary,
}

impl Collision {
    /// Whether the run ends
    #[inline]
    pub fn is_hit(self) -> bool {
        !matches!(self, Collision::NoCollision)
    }
}

/// Check whether the head has left `[0, width) × [0, height)`
#[inline]
pub fn boundary_collision(head: Position, grid: &Grid) -> bool {
    !grid.contains(head)
}

/// Check whether any non-head segment shares the head's cell
///
/// A single-cell step can create at most one overlap per tick.
pub fn self_collision(snake: &SnakeBody) -> bool {
    let head = snake.head();
    snake.body().any(|segment| segment == head)
}

/// Run both checks against a freshly moved snake
pub fn check_collision(snake: &SnakeBody, grid: &Grid) -> Collision {
    if boundary_collision(snake.head(), grid) {
        Collision::Boundary
    } else if self_collision(snake) {
        Collision::SelfCollision
    } else {
        Collision::NoCollision
    }
}
