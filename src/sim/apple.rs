//! Apple placement
//!
//! Uniform rejection sampling over the grid, bounded by `MAX_SPAWN_ATTEMPTS`. When the
//! snake covers most of the board the sampler falls back to picking uniformly among the
//! remaining free cells, so placement always terminates.

use glam::IVec2;
use rand::Rng;

use super::grid::{Grid, Position};
use super::snake::SnakeBody;
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Pick a cell not occupied by `snake`.
///
/// Returns `None` only when the snake fills every cell of the grid.
pub fn spawn_apple<R: Rng + ?Sized>(rng: &mut R, snake: &SnakeBody, grid: &Grid) -> Option<Position> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = IVec2::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if !snake.occupies(candidate) {
            log::debug!("Apple spawned at ({}, {})", candidate.x, candidate.y);
            return Some(candidate);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
    if free.is_empty() {
        return None;
    }

    log::warn!(
        "Apple sampling exhausted {} attempts, picking among {} free cells",
        MAX_SPAWN_ATTEMPTS,
        free.len()
    );
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_avoids_snake() {
        let grid = Grid::new(20, 20);
        let snake = SnakeBody::new_centered(&grid);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let apple = spawn_apple(&mut rng, &snake, &grid).unwrap();
            assert!(grid.contains(apple));
            assert!(!snake.occupies(apple));
        }
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        // 3x1 grid with a 2-segment snake leaves exactly one cell
        let grid = Grid::new(3, 1);
        let snake = SnakeBody::new_centered(&grid);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(spawn_apple(&mut rng, &snake, &grid), Some(IVec2::new(0, 0)));
    }

    #[test]
    fn test_spawn_on_full_board_returns_none() {
        let grid = Grid::new(3, 1);
        let snake = SnakeBody::from_segments(grid.cells()).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(spawn_apple(&mut rng, &snake, &grid), None);
    }

    #[test]
    fn test_spawn_on_empty_grid_returns_none() {
        let grid: Grid = serde_json::from_str(r#"{ "width": 0, "height": 0 }"#).unwrap();
        let snake = SnakeBody::from_segments([IVec2::new(0, 0), IVec2::new(1, 0)]).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(spawn_apple(&mut rng, &snake, &grid), None);
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let grid = Grid::new(20, 20);
        let snake = SnakeBody::new_centered(&grid);
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                spawn_apple(&mut a, &snake, &grid),
                spawn_apple(&mut b, &snake, &grid)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_apple_never_on_snake(seed in any::<u64>(), width in 3i32..12, height in 1i32..12, len in 2usize..40) {
            let grid = Grid::new(width, height);
            let cells: Vec<_> = grid.cells().take(len).collect();
            prop_assume!(cells.len() >= 2);
            let snake = SnakeBody::from_segments(cells).unwrap();
            let mut rng = Pcg32::seed_from_u64(seed);
            match spawn_apple(&mut rng, &snake, &grid) {
                Some(apple) => {
                    prop_assert!(grid.contains(apple));
                    prop_assert!(!snake.occupies(apple));
                }
                None => prop_assert_eq!(snake.len(), grid.cell_count()),
            }
        }
    }
}
