//! Demo player
//!
//! Greedy steering toward the apple for the headless runner: never reverses, avoids
//! cells that would end the run on the next step, prefers going straight on ties.

use crate::sim::{Direction, GameState, InputEvent, Position};

/// Pick the direction the demo player wants next
pub fn choose_direction(state: &GameState) -> Direction {
    let head = state.snake.head();
    Direction::ALL
        .into_iter()
        .filter(|dir| !state.direction.is_opposite(*dir))
        .map(|dir| {
            let next = head + dir.delta();
            let distance = (state.apple - next).abs().element_sum();
            (dir, is_safe(state, next), distance)
        })
        .min_by_key(|&(dir, safe, distance)| (!safe, distance, dir != state.direction))
        .map(|(dir, _, _)| dir)
        .unwrap_or(state.direction)
}

/// Steering event to send this frame, if any.
///
/// While paused this always steers, which is also how the demo resumes after a reset.
pub fn next_input(state: &GameState) -> Option<InputEvent> {
    let dir = choose_direction(state);
    if state.paused || dir != state.desired_direction {
        Some(InputEvent::Steer(dir))
    } else {
        None
    }
}

/// Whether moving the head to `next` survives the coming step
fn is_safe(state: &GameState, next: Position) -> bool {
    if !state.grid.contains(next) {
        return false;
    }
    // The tail only moves out of the way when the snake is not about to grow
    let grows = state.snake.head() == state.apple;
    let blocking = if grows {
        state.snake.len()
    } else {
        state.snake.len() - 1
    };
    !state.snake.segments().take(blocking).any(|segment| segment == next)
}
