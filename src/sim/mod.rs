//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Steps are gated by a fixed-interval clock fed with caller-supplied time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod apple;
pub mod clock;
pub mod collision;
pub mod grid;
pub mod input;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::spawn_apple;
pub use clock::TickClock;
pub use collision::{Collision, boundary_collision, check_collision, self_collision};
pub use grid::{Direction, Grid, Position};
pub use input::{InputEvent, InputOutcome, apply_input};
pub use snake::{MIN_SNAKE_LENGTH, SnakeBody};
pub use state::{GameEvent, GamePhase, GameState, RunSummary};
pub use tick::{TickOutcome, step};
