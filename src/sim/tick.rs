//! Single simulation step
//!
//! Order of operations:
//! 1. Eating is detected on the pre-move head
//! 2. The buffered direction is committed and the snake moves (growing if it ate)
//! 3. Collisions are checked on the moved snake; a hit resets the run
//! 4. After eating, a new apple is placed off the moved snake; a full board is a win

use rand::Rng;

use super::apple::spawn_apple;
use super::collision::{Collision, check_collision};
use super::state::{GameEvent, GameState, RunSummary};

/// What a step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteApple { score: u32 },
    /// Run ended in a collision; state has been reset
    Died { cause: Collision, run: RunSummary },
    /// Snake filled the grid; state has been reset
    BoardCleared { run: RunSummary },
}

/// Advance the game state by one step. Callers gate this with the tick clock.
pub fn step<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, now_ms: u64) -> TickOutcome {
    let grow = state.snake.head() == state.apple;
    if grow {
        state.score += 1;
    }

    state.direction = state.desired_direction;
    state.snake.move_step(state.direction, grow);
    state.time_ticks += 1;

    let collision = check_collision(&state.snake, &state.grid);
    if collision.is_hit() {
        let run = state.run_summary();
        log::info!(
            "Run over ({:?}): score {}, length {}, {} ticks",
            collision,
            run.score,
            run.length,
            run.ticks
        );
        state.push_event(GameEvent::Died { cause: collision, run });
        state.reset(rng, now_ms);
        return TickOutcome::Died { cause: collision, run };
    }

    if !grow {
        return TickOutcome::Moved;
    }

    let eaten_at = state.apple;
    match spawn_apple(rng, &state.snake, &state.grid) {
        Some(apple) => {
            state.apple = apple;
            state.push_event(GameEvent::AppleEaten {
                at: eaten_at,
                score: state.score,
            });
            TickOutcome::AteApple { score: state.score }
        }
        None => {
            let run = state.run_summary();
            log::info!("Board cleared with score {} in {} ticks", run.score, run.ticks);
            state.push_event(GameEvent::BoardCleared { run });
            state.reset(rng, now_ms);
            TickOutcome::BoardCleared { run }
        }
    }
}
