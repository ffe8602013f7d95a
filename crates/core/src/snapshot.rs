//! Snapshot module - owned display copies for diffing redraws

use crate::block::Block;
use crate::controller::GameStatus;
use crate::field::Field;
use crate::square::Square;
use crate::types::{Color, ShapeKind};

/// Display copy of the game: field colors with the active block painted on top.
///
/// Owned separately from the field so a presentation layer can keep the
/// previous frame and compare without aliasing the live grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    width: u8,
    height: u8,
    cells: Box<[Color]>,
    pub active: Option<ShapeKind>,
    pub status: GameStatus,
}

impl Snapshot {
    /// Compose field colors and the (optional) active block
    pub fn compose(field: &Field, block: Option<&Block>, status: GameStatus) -> Self {
        let mut cells: Box<[Color]> = field.cells().into();
        let width = usize::from(field.width());
        if let Some(block) = block {
            for square in block.squares() {
                let (x, y) = square.cord();
                if !field.is_out_of_bounds(x, y) {
                    cells[(y as usize) * width + (x as usize)] = square.color();
                }
            }
        }
        Self {
            width: field.width(),
            height: field.height(),
            cells,
            active: block.map(Block::kind),
            status,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return None;
        }
        Some(self.cells[y * usize::from(self.width) + x])
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Cells whose color differs from `prev`, with their new color.
    ///
    /// A snapshot of different dimensions counts as entirely changed.
    pub fn changed_cells<'a>(&'a self, prev: &'a Snapshot) -> impl Iterator<Item = Square> + 'a {
        let same_size = prev.width == self.width && prev.height == self.height;
        let width = usize::from(self.width);
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(i, c)| !same_size || prev.cells[i] != *c)
            .map(move |(i, &c)| Square::new((i % width) as i32, (i / width) as i32, c))
    }
}
