//! Frame orchestrator
//!
//! `Game` owns the one `GameState` and the RNG. Each rendered frame the front end calls
//! [`Game::frame`] with the input events gathered since the last frame, then
//! [`Game::render`]. A frame drains input, asks the tick clock once, and runs at most one
//! simulation step.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::HighScores;
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, InputOutcome, TickOutcome, apply_input, step};

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No step was due
    Idle,
    /// One simulation step ran
    Stepped(TickOutcome),
    /// A quit event arrived; the caller should exit
    Quit,
}

pub struct Game {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    cell_size: u32,
    high_scores: HighScores,
}

impl Game {
    /// Start a new game; the first run begins paused
    pub fn new(settings: &Settings, now_ms: u64) -> Self {
        let seed = settings.resolve_seed();
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(settings.grid(), settings.tick_interval_ms, &mut rng, now_ms);

        log::info!(
            "New game: {}x{} grid, {} ms ticks, seed {}",
            state.grid.width(),
            state.grid.height(),
            settings.tick_interval_ms,
            seed
        );

        Self {
            state,
            rng,
            seed,
            cell_size: settings.cell_size,
            high_scores: HighScores::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Run one frame at monotonic time `now_ms`
    pub fn frame<I>(&mut self, events: I, now_ms: u64) -> FrameOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if apply_input(&mut self.state, event, now_ms) == InputOutcome::Quit {
                log::info!("Quit requested");
                return FrameOutcome::Quit;
            }
        }

        let paused = self.state.paused;
        if !self.state.clock.try_fire(now_ms, paused) {
            return FrameOutcome::Idle;
        }

        let outcome = step(&mut self.state, &mut self.rng, now_ms);
        let finished = match outcome {
            TickOutcome::Died { run, .. } => Some((run, false)),
            TickOutcome::BoardCleared { run } => Some((run, true)),
            TickOutcome::Moved | TickOutcome::AteApple { .. } => None,
        };
        if let Some((run, cleared)) = finished {
            if let Some(rank) = self.high_scores.add_run(run, cleared) {
                log::info!("Score {} ranks #{} this session", run.score, rank);
            }
        }
        FrameOutcome::Stepped(outcome)
    }

    /// Hand the settled state to the external renderer
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        draw_frame(&self.state, self.cell_size, renderer);
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
