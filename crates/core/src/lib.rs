//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **no
//! dependencies** on terminal rendering or input devices, so it runs the same
//! under the terminal frontend, in tests, and in benchmarks.
//!
//! # Module Structure
//!
//! - [`square`]: a single colored cell and its direction-shifted coordinate
//! - [`shape`]: block templates and 90° matrix rotation
//! - [`block`]: the falling block (4 squares + shape matrix)
//! - [`field`]: the grid of settled squares, collision checks, fixing and row clears
//! - [`controller`]: spawn / move / fix / game-over orchestration
//! - [`session`]: command queue and drop timer on one thread
//! - [`snapshot`]: display copies of the game for diffing redraws
//! - [`rng`]: seeded uniform block selection
//!
//! # Game Rules
//!
//! - Blocks spawn horizontally centered on the top row
//! - Left/right moves into a wall or the pile are ignored
//! - A blocked down move fixes the block, clears full rows and spawns the next block
//! - A spawned block that overlaps the pile ends the game
//! - Rotation turns the block clockwise when the turned cells are free (no wall kicks)
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameController, GameStatus};
//! use tui_blocks_types::{Command, ShapeKind};
//!
//! let mut game = GameController::new(12345);
//! game.start();
//! game.spawn_kind(ShapeKind::O);
//!
//! // Drop the block until it lands and the next one spawns.
//! for _ in 0..19 {
//!     game.handle(Command::MoveDown);
//! }
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.field().occupied_cells().count(), 4);
//! ```

pub mod block;
pub mod controller;
pub mod field;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod square;
pub mod timer;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use controller::{GameController, GameEvent, GameStatus};
pub use field::Field;
pub use rng::{ShapeRandomizer, SimpleRng};
pub use session::Session;
pub use shape::{spawn_origin, template, Shape};
pub use snapshot::Snapshot;
pub use square::Square;
pub use timer::DropTimer;
