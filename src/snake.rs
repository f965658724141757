use std::collections::{HashSet, VecDeque};

use crate::config::{GridSize, MAX_SPEED, SPEED_INCREMENT};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one step in `direction`, wrapped
    /// into bounds on both axes. There is no off-grid state.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap_axis(self.x + dx, i32::from(bounds.width)),
            y: wrap_axis(self.y + dy, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Result of one movement tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// Snake advanced one cell; `head` is the new front cell for the
    /// driver to test against food.
    Advanced { head: Position },
    /// The next head cell hit the body; the snake is now over.
    Collided,
    /// Step ignored because the snake is paused or already over.
    Skipped,
}

/// Mutable snake state: body, direction buffering, growth and speed.
///
/// Growth is lazy. `grow` raises only the target length; the body
/// catches up one cell on the following step while the tail stays put
/// for one extra tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    last_removed: Option<Position>,
    speed: u16,
    paused: bool,
    over: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction
    /// and base tick rate.
    #[must_use]
    pub fn new(start: Position, direction: Direction, base_speed: u16) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
            target_length: 1,
            last_removed: None,
            speed: base_speed,
            paused: false,
            over: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction, base_speed: u16) -> Self {
        let target_length = segments.len().max(1);
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            target_length,
            last_removed: None,
            speed: base_speed,
            paused: false,
            over: false,
        }
    }

    /// Buffers a direction change for the next step.
    ///
    /// The request is silently ignored when it reverses the current
    /// committed direction. Several requests between two steps
    /// overwrite each other; only the last accepted one takes effect.
    /// Requests are accepted while paused and buffered for resume.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Applies one movement tick.
    ///
    /// Commits the pending direction, then checks the next head cell
    /// against the body before moving. The current head and the cell
    /// immediately behind it are exempt from the collision check: both
    /// are vacated by the time the head would arrive.
    pub fn step(&mut self, bounds: GridSize) -> StepOutcome {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        if self.paused || self.over {
            return StepOutcome::Skipped;
        }

        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }

        let next_head = self.head().stepped(self.direction, bounds);
        if self.body.iter().skip(2).any(|cell| *cell == next_head) {
            self.over = true;
            return StepOutcome::Collided;
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_length {
            self.last_removed = self.body.pop_back();
        }

        StepOutcome::Advanced { head: next_head }
    }

    /// Queues one cell of growth and raises the tick rate by one
    /// increment, capped at [`MAX_SPEED`]. The body is not touched
    /// here; the extra cell appears on the next step.
    pub fn grow(&mut self) {
        self.target_length += 1;
        self.speed = self.speed.saturating_add(SPEED_INCREMENT).min(MAX_SPEED);
    }

    /// Flips the paused flag. Has no effect once the snake is over.
    pub fn toggle_pause(&mut self) {
        if !self.over {
            self.paused = !self.paused;
        }
    }

    /// Restores the snake to a fresh one-cell body at `center` facing
    /// right. Speed is deliberately left untouched; resetting it is the
    /// driver's call.
    pub fn reset(&mut self, center: Position) {
        self.body.clear();
        self.body.push_front(center);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.target_length = 1;
        self.last_removed = None;
        self.paused = false;
        self.over = false;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the set of all cells the body currently occupies.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in practice;
    /// present to pair with `len` per convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the length the body is growing toward.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the tail cell vacated by the most recent step, for
    /// renderers that erase rather than redraw.
    #[must_use]
    pub fn last_removed(&self) -> Option<Position> {
        self.last_removed
    }

    /// Returns the current committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current tick rate in ticks per second.
    #[must_use]
    pub fn speed(&self) -> u16 {
        self.speed
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
