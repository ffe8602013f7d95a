//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Key repeat and
//! timing are left to the terminal and the session's drop timer.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{command_for_key, is_press};
