//! Grid Snake native entry point
//!
//! Runs a headless session: the demo player supplies input, frames are paced at the
//! configured rate, and every simulation step is printed as a character grid.
//!
//! Usage: `grid-snake [settings.json]`

use std::path::Path;
use std::thread;
use std::time::Instant;

use grid_snake::autopilot;
use grid_snake::renderer::TextRenderer;
use grid_snake::sim::{GameEvent, InputEvent};
use grid_snake::{FrameOutcome, Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Grid Snake (headless) starting...");

    let path = std::env::args().nth(1);
    let settings = Settings::load(path.as_deref().map(Path::new));

    let start = Instant::now();
    let mut game = Game::new(&settings, 0);
    let mut renderer = TextRenderer::new(settings.grid());
    let mut steps: u64 = 0;

    loop {
        let now_ms = start.elapsed().as_millis() as u64;

        let mut events: Vec<InputEvent> = autopilot::next_input(game.state()).into_iter().collect();
        if settings.demo_ticks > 0 && steps >= settings.demo_ticks {
            events.push(InputEvent::Quit);
        }

        let outcome = game.frame(events, now_ms);
        if outcome == FrameOutcome::Quit {
            break;
        }

        for event in game.drain_events() {
            match event {
                GameEvent::AppleEaten { score, .. } => log::info!("Apple eaten, score {}", score),
                GameEvent::Died { cause, run } => {
                    println!("Game over ({:?}) with score {}", cause, run.score)
                }
                GameEvent::BoardCleared { run } => println!("Board cleared! Score {}", run.score),
                GameEvent::Paused | GameEvent::Resumed => log::debug!("{:?}", event),
            }
        }

        game.render(&mut renderer);
        if let FrameOutcome::Stepped(_) = outcome {
            steps += 1;
            println!("score {}\n{}\n", game.state().score, renderer.frame());
        }

        thread::sleep(settings.frame_time());
    }

    let best = game.high_scores().top_score().unwrap_or(game.state().score);
    println!("Session over after {} steps, best score {}", steps, best);
    if let Ok(snapshot) = serde_json::to_string(game.state()) {
        log::debug!("Final state: {}", snapshot);
    }
}
