//! Square module - a single colored unit cell
//!
//! Squares carry no bounds information. Whether a coordinate is inside the
//! field is decided by [`Field`](crate::field::Field).

use crate::types::{Color, Direction};

/// One colored cell at an integer coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Square {
    x: i32,
    y: i32,
    color: Color,
}

impl Square {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Current `(x, y)` coordinate
    pub fn cord(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_cord(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Coordinate this square would occupy after a move, without moving it
    pub fn moved_cord(&self, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.delta();
        (self.x + dx, self.y + dy)
    }
}
