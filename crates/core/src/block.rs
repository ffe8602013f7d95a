//! Block module - the falling tetromino
//!
//! A block is four same-colored squares plus the shape matrix they were
//! generated from. Movement and rotation mutate the block unconditionally;
//! legality is checked by [`Field`](crate::field::Field) before the caller
//! applies them.

use crate::rng::ShapeRandomizer;
use crate::shape::{spawn_origin, template, Shape};
use crate::square::Square;
use crate::types::{Color, Direction, ShapeKind};

/// The active falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    kind: ShapeKind,
    squares: [Square; 4],
    shape: Shape,
    /// Field-space position of the shape matrix's top-left corner
    origin: (i32, i32),
}

impl Block {
    /// Create a block of the given kind at its spawn position
    pub fn new(kind: ShapeKind, field_width: u8) -> Self {
        let shape = template(kind);
        let origin = spawn_origin(kind, field_width);
        let mut squares = [Square::new(0, 0, kind.color()); 4];
        place_squares(&mut squares, &shape, origin);
        Self {
            kind,
            squares,
            shape,
            origin,
        }
    }

    /// Create a block with a uniformly random template
    pub fn random(shapes: &mut ShapeRandomizer, field_width: u8) -> Self {
        Self::new(shapes.draw(), field_width)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn squares(&self) -> &[Square; 4] {
        &self.squares
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// Current coordinates of all four squares
    pub fn cords(&self) -> [(i32, i32); 4] {
        self.squares.map(|s| s.cord())
    }

    /// Coordinates after moving one cell in `direction`
    pub fn moved_cords(&self, direction: Direction) -> [(i32, i32); 4] {
        self.squares.map(|s| s.moved_cord(direction))
    }

    /// Coordinates the squares would occupy after [`Block::rotate`]
    pub fn rotated_cords(&self) -> [(i32, i32); 4] {
        let mut turned = self.squares;
        place_squares(&mut turned, &self.shape.turned(), self.origin);
        turned.map(|s| s.cord())
    }

    /// Move every square one cell in `direction`
    pub fn move_by(&mut self, direction: Direction) {
        for square in &mut self.squares {
            let (x, y) = square.moved_cord(direction);
            square.set_cord(x, y);
        }
        let (dx, dy) = direction.delta();
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
    }

    /// Turn the block 90° clockwise in place around its matrix origin.
    ///
    /// Returns the new shape matrix.
    pub fn rotate(&mut self) -> Shape {
        self.shape = self.shape.turned();
        place_squares(&mut self.squares, &self.shape, self.origin);
        self.shape
    }
}

/// Assign coordinates to the squares from the shape's occupied cells in row-major order
fn place_squares(squares: &mut [Square; 4], shape: &Shape, origin: (i32, i32)) {
    for (square, (cx, cy)) in squares.iter_mut().zip(shape.cells()) {
        square.set_cord(origin.0 + i32::from(cx), origin.1 + i32::from(cy));
    }
}
