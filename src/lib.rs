//! Game-state engine for a single-player snake on a toroidal grid.
//!
//! The simulation core is [`snake::Snake`] (movement, direction
//! buffering, collision, growth) and [`food::FoodSpawner`] (placement
//! disjoint from the snake). [`game::GameState`] composes the two once
//! per tick; rendering and input live in their own modules and never
//! feed back into the core.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal;
