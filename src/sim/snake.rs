//! Snake body: ordered cells, head first

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Position};

/// Minimum number of segments a snake ever has
pub const MIN_SNAKE_LENGTH: usize = 2;

/// The snake's occupied cells. Index 0 is the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
}

impl SnakeBody {
    /// Two-segment starting snake: head at the grid center, tail one cell to the right
    pub fn new_centered(grid: &Grid) -> Self {
        let head = grid.center();
        Self {
            segments: VecDeque::from([head, head + IVec2::X]),
        }
    }

    /// Build a snake from explicit cells (head first).
    ///
    /// Returns `None` for fewer than [`MIN_SNAKE_LENGTH`] segments.
    pub fn from_segments<I: IntoIterator<Item = Position>>(segments: I) -> Option<Self> {
        let segments: VecDeque<Position> = segments.into_iter().collect();
        if segments.len() < MIN_SNAKE_LENGTH {
            return None;
        }
        Some(Self { segments })
    }

    #[inline]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    #[inline]
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a snake built through this type
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Every segment except the head
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().skip(1).copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Advance one cell in `direction`.
    ///
    /// The new head is pushed to the front; the tail is dropped unless `grow` is set.
    /// Bounds and self-overlap are not checked here. Returns the new head.
    pub fn move_step(&mut self, direction: Direction, grow: bool) -> Position {
        let new_head = self.head() + direction.delta();
        self.segments.push_front(new_head);
        if !grow {
            self.segments.pop_back();
        }
        new_head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> SnakeBody {
        SnakeBody::from_segments(cells.iter().map(|&(x, y)| IVec2::new(x, y))).unwrap()
    }

    #[test]
    fn test_new_centered() {
        let s = SnakeBody::new_centered(&Grid::new(20, 20));
        assert_eq!(s.len(), 2);
        assert_eq!(s.head(), IVec2::new(10, 10));
        assert_eq!(s.tail(), IVec2::new(11, 10));
    }

    #[test]
    fn test_from_segments_rejects_short_snake() {
        assert!(SnakeBody::from_segments([IVec2::ZERO]).is_none());
        assert!(SnakeBody::from_segments(std::iter::empty::<Position>()).is_none());
    }

    #[test]
    fn test_move_without_growth_keeps_length() {
        let mut s = snake(&[(5, 5), (6, 5), (7, 5)]);
        let head = s.move_step(Direction::Up, false);
        assert_eq!(head, IVec2::new(5, 4));
        assert_eq!(s.len(), 3);
        assert_eq!(
            s.segments().collect::<Vec<_>>(),
            vec![IVec2::new(5, 4), IVec2::new(5, 5), IVec2::new(6, 5)]
        );
    }

    #[test]
    fn test_move_with_growth_keeps_tail() {
        let mut s = snake(&[(5, 5), (6, 5)]);
        s.move_step(Direction::Left, true);
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), IVec2::new(4, 5));
        assert_eq!(s.tail(), IVec2::new(6, 5));
    }

    #[test]
    fn test_move_does_not_validate_bounds() {
        let mut s = snake(&[(0, 0), (1, 0)]);
        s.move_step(Direction::Left, false);
        assert_eq!(s.head(), IVec2::new(-1, 0));
    }

    #[test]
    fn test_body_skips_head() {
        let s = snake(&[(1, 1), (2, 1), (3, 1)]);
        let body: Vec<_> = s.body().collect();
        assert_eq!(body, vec![IVec2::new(2, 1), IVec2::new(3, 1)]);
        assert!(s.occupies(IVec2::new(1, 1)));
        assert!(!s.occupies(IVec2::new(4, 1)));
    }
}
