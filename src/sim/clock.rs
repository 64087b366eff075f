//! Fixed-interval tick gate
//!
//! Decides once per frame whether a simulation step is due. Time is a monotonic
//! millisecond count supplied by the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickClock {
    interval_ms: u64,
    last_step_ms: u64,
}

impl TickClock {
    /// Create a clock whose reference point is `now_ms`
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_step_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Timestamp of the last step (or the last re-arm)
    pub fn last_step_ms(&self) -> u64 {
        self.last_step_ms
    }

    /// A step is due once strictly more than one interval has passed and play is not paused
    pub fn is_due(&self, now_ms: u64, paused: bool) -> bool {
        !paused && now_ms.saturating_sub(self.last_step_ms) > self.interval_ms
    }

    /// Fire if due. The reference moves to `now_ms`, so missed ticks are never made up.
    pub fn try_fire(&mut self, now_ms: u64, paused: bool) -> bool {
        if self.is_due(now_ms, paused) {
            self.last_step_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Push the next tick a full interval past `now_ms`
    pub fn rearm(&mut self, now_ms: u64) {
        self.last_step_ms = now_ms;
    }
}
