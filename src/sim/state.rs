//! Game state and core simulation types
//!
//! `GameState` is the single authoritative aggregate. It is owned by the frame
//! orchestrator; the simulation functions borrow it for the duration of one call.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::apple::spawn_apple;
use super::clock::TickClock;
use super::collision::Collision;
use super::grid::{Direction, Grid, Position};
use super::snake::SnakeBody;
use crate::consts::MAX_PENDING_EVENTS;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the snake
    Playing,
    /// Startup, after a reset, or after a pause toggle; waiting for steering or another toggle
    Paused,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    /// Snake length when the run ended
    pub length: usize,
    /// Simulation steps taken during the run
    pub ticks: u64,
}

/// Notable things that happened since the front end last looked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AppleEaten { at: Position, score: u32 },
    Died { cause: Collision, run: RunSummary },
    /// Snake filled the whole grid
    BoardCleared { run: RunSummary },
    Paused,
    Resumed,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub snake: SnakeBody,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Most recently accepted steering input, applied on the next tick
    pub desired_direction: Direction,
    pub apple: Position,
    pub score: u32,
    pub paused: bool,
    /// Tick gate; holds the last-step timestamp
    pub clock: TickClock,
    /// Simulation steps in the current run
    pub time_ticks: u64,
    /// Pending events (drained by the caller each frame)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run: two-segment snake centered on the grid heading left, a placed apple,
    /// score 0, paused.
    pub fn new<R: Rng + ?Sized>(grid: Grid, tick_interval_ms: u64, rng: &mut R, now_ms: u64) -> Self {
        let snake = SnakeBody::new_centered(&grid);
        // A legal grid has at least three cells, so the starting snake always leaves one free
        let apple = spawn_apple(rng, &snake, &grid).unwrap_or(Position::ZERO);

        Self {
            grid,
            snake,
            direction: Direction::Left,
            desired_direction: Direction::Left,
            apple,
            score: 0,
            paused: true,
            clock: TickClock::new(tick_interval_ms, now_ms),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Replace everything with a fresh run, keeping grid, tick interval and pending events
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: u64) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.grid, self.clock.interval_ms(), rng, now_ms);
        self.events = events;
        log::info!("Game reset, awaiting input");
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        }
    }

    /// Snapshot of the current run for leaderboards and events
    pub fn run_summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            length: self.snake.len(),
            ticks: self.time_ticks,
        }
    }

    /// Queue an event. Once `MAX_PENDING_EVENTS` are waiting, the oldest is dropped.
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
