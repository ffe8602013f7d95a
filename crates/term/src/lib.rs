//! Terminal presentation layer.
//!
//! Renders the game into a character framebuffer and flushes it to the
//! terminal through `crossterm`. Redraws are incremental at two levels:
//! [`GameView::paint_changes`] repaints only field cells whose color changed,
//! and [`TerminalRenderer::present`] writes only glyph runs that differ from
//! the previously presented frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{changed_runs, encode_full_into, encode_runs_into, Run, TerminalRenderer};
