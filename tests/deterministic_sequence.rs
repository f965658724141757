use torus_snake::config::{GridSize, BASE_SPEED};
use torus_snake::food::FoodSpawner;
use torus_snake::game::{GameState, GameStatus};
use torus_snake::input::{Direction, GameInput};
use torus_snake::snake::Position;

fn default_board() -> GridSize {
    GridSize {
        width: 32,
        height: 24,
    }
}

/// Scripted session on the default 32x24 board: move, turn, eat, grow.
#[test]
fn stepwise_movement_turning_and_growth() {
    let mut state = GameState::new_with_seed(default_board(), BASE_SPEED, 42);
    assert_eq!(state.snake.head(), Position { x: 16, y: 12 });
    assert_eq!(state.snake.len(), 1);

    // Park the food out of the scripted path.
    state.food = FoodSpawner::at(Position { x: 0, y: 0 });

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 17, y: 12 });
    assert_eq!(state.snake.len(), 1);

    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 17, y: 13 });

    // Put the food directly in the snake's path and eat it.
    state.food = FoodSpawner::at(Position { x: 17, y: 14 });
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 17, y: 14 });
    assert_eq!(state.snake.target_length(), 2);
    assert_eq!(state.snake.speed(), BASE_SPEED + 1);
    assert_ne!(state.food.position(), Position { x: 17, y: 14 });

    // Growth materializes on the step after eating.
    state.tick();
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 17, y: 15 });
    assert_eq!(state.status(), GameStatus::Playing);
}

/// Running off the right edge re-enters on the left at the same row.
#[test]
fn crossing_the_edge_wraps_instead_of_ending_the_round() {
    let mut state = GameState::new_with_seed(default_board(), BASE_SPEED, 7);
    state.food = FoodSpawner::at(Position { x: 0, y: 0 });

    // 15 ticks from x=16 reaches the right edge, one more wraps to 0.
    for _ in 0..15 {
        state.tick();
    }
    assert_eq!(state.snake.head(), Position { x: 31, y: 12 });

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 0, y: 12 });
    assert_eq!(state.status(), GameStatus::Playing);
}

/// The same seed produces the same food sequence tick for tick.
#[test]
fn seeded_sessions_are_reproducible() {
    let mut left = GameState::new_with_seed(default_board(), BASE_SPEED, 1234);
    let mut right = GameState::new_with_seed(default_board(), BASE_SPEED, 1234);

    assert_eq!(left.food.position(), right.food.position());

    for _ in 0..200 {
        left.apply_input(GameInput::Direction(Direction::Down));
        right.apply_input(GameInput::Direction(Direction::Down));
        left.tick();
        right.tick();

        assert_eq!(left.snake.head(), right.snake.head());
        assert_eq!(left.food.position(), right.food.position());
    }
}
