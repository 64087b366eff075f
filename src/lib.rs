//! Grid Snake - a tick-driven snake game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, collisions, apples, input, tick clock)
//! - `game`: Frame orchestrator that owns the one authoritative `GameState`
//! - `renderer`: Draw-command seam toward an external renderer
//! - `autopilot`: Demo steering used by the headless runner
//! - `highscores`: In-memory session leaderboard
//! - `settings`: Startup configuration

pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default grid dimensions (cells)
    pub const GRID_WIDTH: i32 = 20;
    pub const GRID_HEIGHT: i32 = 20;

    /// Smallest legal grid: the starting snake sits at the center with its tail one cell
    /// to the right, so the grid must be at least three cells wide.
    pub const MIN_GRID_WIDTH: i32 = 3;
    pub const MIN_GRID_HEIGHT: i32 = 1;

    /// Largest grid side (cells)
    pub const MAX_GRID_SIDE: i32 = 512;

    /// Pixel size of one grid cell
    pub const CELL_SIZE: u32 = 24;
    /// Largest cell size; keeps `side * cell_size` inside `i32` pixel coordinates
    pub const MAX_CELL_SIZE: u32 = 1024;

    /// Target frame rate (pacing only, never affects simulation results)
    pub const TARGET_FPS: u32 = 60;

    /// Milliseconds between simulation steps
    pub const TICK_INTERVAL_MS: u64 = 150;

    /// Events kept for the front end before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// Random draws before the apple spawner falls back to scanning free cells
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;
}
