//! Input intake
//!
//! Turns discrete events from the external input source into changes of the buffered
//! steering direction and the paused flag. Steering and pause toggling are two
//! independent signals feeding the same flag:
//! - a valid steer always resumes play
//! - a pause toggle flips the flag and re-arms the tick clock either way

use serde::{Deserialize, Serialize};

use super::grid::Direction;
use super::state::{GameEvent, GameState};

/// Event from the external input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Steer(Direction),
    TogglePause,
    Quit,
}

/// What the orchestrator should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Apply one input event to the state
pub fn apply_input(state: &mut GameState, event: InputEvent, now_ms: u64) -> InputOutcome {
    match event {
        InputEvent::Steer(direction) => {
            steer(state, direction);
            InputOutcome::Continue
        }
        InputEvent::TogglePause => {
            toggle_pause(state, now_ms);
            InputOutcome::Continue
        }
        InputEvent::Quit => InputOutcome::Quit,
    }
}

/// Buffer `direction` unless it reverses the committed direction.
///
/// Returns whether the input was accepted.
pub fn steer(state: &mut GameState, direction: Direction) -> bool {
    // Compare against the committed direction, not the buffered one
    if state.direction.is_opposite(direction) {
        log::trace!("Rejected reversal {:?} -> {:?}", state.direction, direction);
        return false;
    }

    state.desired_direction = direction;
    if state.paused {
        state.paused = false;
        state.push_event(GameEvent::Resumed);
        log::debug!("Resumed by steering {:?}", direction);
    }
    true
}

/// Flip the paused flag. Always re-arms the clock so no catch-up step follows.
pub fn toggle_pause(state: &mut GameState, now_ms: u64) {
    state.paused = !state.paused;
    if state.paused {
        state.push_event(GameEvent::Paused);
        log::debug!("Paused");
    } else {
        state.push_event(GameEvent::Resumed);
        log::debug!("Resumed by pause toggle");
    }
    state.clock.rearm(now_ms);
}
