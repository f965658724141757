use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::Position;

/// The whole grid is occupied, so no food cell can be placed.
///
/// Under normal play this never fires; the board would have to be
/// completely filled by the snake, which the driver may surface as a
/// "board filled" ending rather than an error screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the {width}x{height} board")]
pub struct NoFreeCellError {
    pub width: u16,
    pub height: u16,
}

/// Owns the single food cell on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodSpawner {
    position: Position,
}

impl FoodSpawner {
    /// Spawns the initial food in a cell not occupied by the snake.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        occupied: &HashSet<Position>,
    ) -> Result<Self, NoFreeCellError> {
        let mut spawner = Self {
            position: Position { x: 0, y: 0 },
        };
        spawner.place_avoiding(rng, bounds, occupied)?;
        Ok(spawner)
    }

    /// Creates a spawner with food at an explicit cell, for tests and
    /// scripted sessions.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Moves the food to a uniformly random cell outside `occupied`.
    ///
    /// Rejection sampling: draw full-grid cells until one is free. The
    /// occupied set is an explicit per-call argument and is never
    /// stored. Draw count rises as the board fills, so the full-board
    /// case is rejected up front instead of looping forever.
    pub fn place_avoiding<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        occupied: &HashSet<Position>,
    ) -> Result<Position, NoFreeCellError> {
        if occupied.len() >= bounds.total_cells() {
            return Err(NoFreeCellError {
                width: bounds.width,
                height: bounds.height,
            });
        }

        loop {
            let candidate = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return Ok(candidate);
            }
        }
    }

    /// Returns the current food cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::FoodSpawner;

    fn small_bounds() -> GridSize {
        GridSize {
            width: 8,
            height: 6,
        }
    }

    #[test]
    fn placement_never_lands_on_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<Position> = (0..6).map(|x| Position { x, y: 0 }).collect();
        let mut spawner = FoodSpawner::at(Position { x: 0, y: 0 });

        for _ in 0..100 {
            let cell = spawner
                .place_avoiding(&mut rng, small_bounds(), &occupied)
                .expect("board has free cells");
            assert!(!occupied.contains(&cell));
            assert_eq!(spawner.position(), cell);
        }
    }

    #[test]
    fn placement_stays_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let occupied = HashSet::new();
        let mut spawner = FoodSpawner::at(Position { x: 0, y: 0 });

        for _ in 0..100 {
            let cell = spawner
                .place_avoiding(&mut rng, small_bounds(), &occupied)
                .expect("empty board always has room");
            assert!(cell.x >= 0 && cell.x < 8);
            assert!(cell.y >= 0 && cell.y < 6);
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(13);
        let bounds = GridSize {
            width: 3,
            height: 3,
        };
        let free = Position { x: 2, y: 2 };
        let occupied: HashSet<Position> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Position { x, y }))
            .filter(|cell| *cell != free)
            .collect();

        let mut spawner = FoodSpawner::at(Position { x: 0, y: 0 });
        let cell = spawner
            .place_avoiding(&mut rng, bounds, &occupied)
            .expect("one cell is still free");

        assert_eq!(cell, free);
    }

    #[test]
    fn full_board_is_a_reportable_error() {
        let mut rng = StdRng::seed_from_u64(17);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let occupied: HashSet<Position> = (0..2)
            .flat_map(|y| (0..2).map(move |x| Position { x, y }))
            .collect();

        let mut spawner = FoodSpawner::at(Position { x: 0, y: 0 });
        let error = spawner
            .place_avoiding(&mut rng, bounds, &occupied)
            .expect_err("full board has no free cell");

        assert_eq!(error.width, 2);
        assert_eq!(error.height, 2);
    }
}
