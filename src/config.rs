use ratatui::style::Color;

use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, where a new snake is placed.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Default grid width in cells (a 640-pixel board at 20-pixel cells).
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells (a 480-pixel board at 20-pixel cells).
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Base tick rate in ticks per second.
pub const BASE_SPEED: u16 = 20;

/// Speed gained for each food item eaten.
pub const SPEED_INCREMENT: u16 = 1;

/// Tick-rate ceiling, five times the base rate.
pub const MAX_SPEED: u16 = 100;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub status: Color,
    pub overlay_title: Color,
}

/// Classic green snake with a red apple.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border: Color::Cyan,
    status: Color::White,
    overlay_title: Color::Green,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    border: Color::Blue,
    status: Color::Cyan,
    overlay_title: Color::Cyan,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN];

/// Looks a theme up by its CLI name, falling back to the classic theme.
#[must_use]
pub fn theme_by_name(name: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .unwrap_or(&THEME_CLASSIC)
}
