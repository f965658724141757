use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::food::FoodSpawner;
use crate::input::{Direction, GameInput};
use crate::snake::{Snake, StepOutcome};

/// Current high-level gameplay state, derived for the renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    BoardFilled,
}

/// Complete mutable game state for one session.
///
/// This is the driver side of the simulation: it owns the snake and the
/// food spawner, advances them once per tick, and mediates between the
/// two on food pickup. It holds no rendering or timing objects.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: FoodSpawner,
    pub tick_count: u64,
    board_filled: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a session with OS-sourced randomness.
    #[must_use]
    pub fn new(bounds: GridSize, base_speed: u16) -> Self {
        Self::new_with_seed(bounds, base_speed, rand::thread_rng().r#gen())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, base_speed: u16, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(bounds.center(), Direction::Right, base_speed);
        let food = FoodSpawner::spawn(&mut rng, bounds, &snake.occupied_cells())
            .expect("fresh board with a one-cell snake always has free cells");

        Self {
            snake,
            food,
            tick_count: 0,
            board_filled: false,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.board_filled {
            return;
        }

        let head = match self.snake.step(self.bounds) {
            StepOutcome::Advanced { head } => head,
            StepOutcome::Collided | StepOutcome::Skipped => return,
        };
        self.tick_count += 1;

        if head == self.food.position() {
            self.snake.grow();

            let occupied = self.snake.occupied_cells();
            if self
                .food
                .place_avoiding(&mut self.rng, self.bounds, &occupied)
                .is_err()
            {
                // The snake covers the whole board. Nothing left to eat.
                self.board_filled = true;
            }
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            // Buffered in every state; meaningless once over, but harmless.
            GameInput::Direction(direction) => self.snake.request_direction(direction),
            GameInput::Pause => self.snake.toggle_pause(),
            GameInput::Restart => {
                if self.snake.is_over() || self.board_filled {
                    self.restart();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Starts a fresh round on the same board.
    ///
    /// Speed carries over from the previous round on purpose, matching
    /// the snake-level reset contract.
    pub fn restart(&mut self) {
        self.snake.reset(self.bounds.center());
        self.board_filled = false;
        self.tick_count = 0;

        let occupied = self.snake.occupied_cells();
        if self
            .food
            .place_avoiding(&mut self.rng, self.bounds, &occupied)
            .is_err()
        {
            // Only possible on a one-cell board.
            self.board_filled = true;
        }
    }

    /// Returns the derived status for rendering and loop control.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.board_filled {
            GameStatus::BoardFilled
        } else if self.snake.is_over() {
            GameStatus::GameOver
        } else if self.snake.is_paused() {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        }
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
