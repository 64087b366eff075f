//! Session leaderboard
//!
//! Tracks the top 10 runs of the current process. Nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::RunSummary;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Snake length at the end of the run
    pub length: usize,
    /// Simulation steps the run lasted
    pub ticks: u64,
    /// Whether the run filled the board
    pub cleared: bool,
}

/// High score leaderboard, sorted by score (descending)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A run makes the table if it scored and beats the lowest entry of a full table
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|lowest| score > lowest.score))
    }

    /// Record a finished run. Returns its 1-indexed rank, or `None` if it missed the table.
    pub fn add_run(&mut self, run: RunSummary, cleared: bool) -> Option<usize> {
        if !self.qualifies(run.score) {
            return None;
        }

        // Ties keep the earlier run ahead
        let index = self.entries.partition_point(|e| e.score >= run.score);
        self.entries.insert(
            index,
            HighScoreEntry {
                score: run.score,
                length: run.length,
                ticks: run.ticks,
                cleared,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32) -> RunSummary {
        RunSummary {
            score,
            length: score as usize + 2,
            ticks: 100,
        }
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(run(0), false), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_entries_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(run(3), false), Some(1));
        assert_eq!(scores.add_run(run(7), false), Some(1));
        assert_eq!(scores.add_run(run(5), false), Some(2));
        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![7, 5, 3]);
        assert_eq!(scores.top_score(), Some(7));
    }

    #[test]
    fn test_ties_rank_after_earlier_runs() {
        let mut scores = HighScores::new();
        scores.add_run(run(5), false);
        assert_eq!(scores.add_run(run(5), true), Some(2));
        assert!(!scores.entries[0].cleared);
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = HighScores::new();
        for s in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_run(run(s), false);
        }
        assert!(!scores.qualifies(1));
        assert_eq!(scores.add_run(run(1), false), None);
        assert_eq!(scores.add_run(run(100), true), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2));
        assert!(scores.entries[0].cleared);
    }
}
