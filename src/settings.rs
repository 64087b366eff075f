//! Game settings
//!
//! Supplied once at startup. Loaded from an optional JSON file; anything missing takes
//! its default and anything out of range is clamped.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Grid;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid width in cells
    pub grid_width: i32,
    /// Grid height in cells
    pub grid_height: i32,
    /// Pixel size of one cell
    pub cell_size: u32,
    /// Frame pacing target (does not affect simulation results)
    pub target_fps: u32,
    /// Milliseconds between simulation steps
    pub tick_interval_ms: u64,
    /// RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Simulation steps the headless runner plays before quitting (0 = until killed)
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            target_fps: TARGET_FPS,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            demo_ticks: 400,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and clamp out-of-range values
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load from a JSON file, falling back to defaults if it is absent or unreadable
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Clamp every field to a playable value
    pub fn sanitized(mut self) -> Self {
        if self.grid_width < MIN_GRID_WIDTH {
            log::warn!("grid_width {} too small, using {}", self.grid_width, MIN_GRID_WIDTH);
            self.grid_width = MIN_GRID_WIDTH;
        }
        if self.grid_height < MIN_GRID_HEIGHT {
            log::warn!("grid_height {} too small, using {}", self.grid_height, MIN_GRID_HEIGHT);
            self.grid_height = MIN_GRID_HEIGHT;
        }
        if self.grid_width > MAX_GRID_SIDE {
            log::warn!("grid_width {} too large, using {}", self.grid_width, MAX_GRID_SIDE);
            self.grid_width = MAX_GRID_SIDE;
        }
        if self.grid_height > MAX_GRID_SIDE {
            log::warn!("grid_height {} too large, using {}", self.grid_height, MAX_GRID_SIDE);
            self.grid_height = MAX_GRID_SIDE;
        }
        if self.cell_size == 0 {
            log::warn!("cell_size must be positive, using {}", CELL_SIZE);
            self.cell_size = CELL_SIZE;
        }
        if self.cell_size > MAX_CELL_SIZE {
            log::warn!("cell_size {} too large, using {}", self.cell_size, MAX_CELL_SIZE);
            self.cell_size = MAX_CELL_SIZE;
        }
        if self.target_fps == 0 {
            log::warn!("target_fps must be positive, using {}", TARGET_FPS);
            self.target_fps = TARGET_FPS;
        }
        if self.tick_interval_ms == 0 {
            log::warn!("tick_interval_ms must be positive, using {}", TICK_INTERVAL_MS);
            self.tick_interval_ms = TICK_INTERVAL_MS;
        }
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Time budget of one rendered frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }

    /// Configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.grid(), Grid::new(20, 20));
        assert_eq!(settings.tick_interval_ms, 150);
        assert_eq!(settings.frame_time(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json_str(r#"{ "grid_width": 32, "seed": 9 }"#).unwrap();
        assert_eq!(settings.grid_width, 32);
        assert_eq!(settings.grid_height, GRID_HEIGHT);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.resolve_seed(), 9);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings = Settings::from_json_str(
            r#"{ "grid_width": 1, "grid_height": 0, "cell_size": 0, "target_fps": 0, "tick_interval_ms": 0 }"#,
        )
        .unwrap();
        assert_eq!(settings.grid_width, MIN_GRID_WIDTH);
        assert_eq!(settings.grid_height, MIN_GRID_HEIGHT);
        assert_eq!(settings.cell_size, CELL_SIZE);
        assert_eq!(settings.target_fps, TARGET_FPS);
        assert_eq!(settings.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_oversized_values_are_clamped() {
        let settings = Settings::from_json_str(
            r#"{ "grid_width": 2000000000, "grid_height": 70000, "cell_size": 4000000000 }"#,
        )
        .unwrap();
        assert_eq!(settings.grid_width, MAX_GRID_SIDE);
        assert_eq!(settings.grid_height, MAX_GRID_SIDE);
        assert_eq!(settings.cell_size, MAX_CELL_SIZE);
        assert_eq!(settings.grid().cell_count(), (MAX_GRID_SIDE * MAX_GRID_SIDE) as usize);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("grid-snake-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"grid_width\": ").unwrap();
        let settings = Settings::load(Some(path.as_path()));
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json_str("{ grid_width: ").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Some(Path::new("/nonexistent/grid-snake.json")));
        assert_eq!(settings, Settings::default());
    }
}
