//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, top row (`y = 0`)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Delay between automatic one-row drops |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Color, Command, Direction, ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(ShapeKind::O.color(), Color::Blue);
//!
//! assert_eq!(Command::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(Command::Start.direction(), None);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Width of one field cell in terminal columns (rendering only).
pub const BLOCK_SIZE: u16 = 2;

/// Delay between automatic one-row drops (1000ms = 1 second per row)
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Color of a single square.
///
/// `Empty` marks an unoccupied field cell; every other variant is a settled
/// or falling square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Red,
    Blue,
    Green,
    Orange,
}

impl Color {
    pub fn is_empty(&self) -> bool {
        matches!(self, Color::Empty)
    }
}

/// Direction a block can be moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Coordinate delta `(dx, dy)` for this direction (y grows downward).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// The four block templates
///
/// - **I**: Red, vertical bar
/// - **O**: Blue, 2x2 square
/// - **J**: Green, hook with the long side on the right
/// - **L**: Orange, hook with the long side on the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    J,
    L,
}

impl ShapeKind {
    /// Every template, in catalog order.
    pub const ALL: [ShapeKind; 4] = [ShapeKind::I, ShapeKind::O, ShapeKind::J, ShapeKind::L];

    /// Color shared by every square of this template.
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::Red,
            ShapeKind::O => Color::Blue,
            ShapeKind::J => Color::Green,
            ShapeKind::L => Color::Orange,
        }
    }
}

/// Commands accepted by the game
///
/// These come from key input and from the drop timer; both go through the
/// same queue so they never interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset the field and spawn the first block
    Start,
    /// Move the block one cell left
    MoveLeft,
    /// Move the block one cell right
    MoveRight,
    /// Move the block one cell down, fixing it when it cannot move
    MoveDown,
    /// Turn the block 90° clockwise
    Rotate,
    /// Leave the game loop
    Quit,
}

impl Command {
    /// Movement direction carried by this command, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveDown => Some(Direction::Down),
            Command::Start | Command::Rotate | Command::Quit => None,
        }
    }
}
