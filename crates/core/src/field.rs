//! Field module - manages the game grid
//!
//! The field is a `width x height` grid where each cell holds a [`Color`];
//! [`Color::Empty`] marks a free cell. Storage is a flat, fixed-length boxed
//! slice in row-major order (`y * width + x`) allocated once at construction.
//!
//! Coordinates: `(x, y)` with `x` growing to the right and `y` growing
//! downward. Row 0 is the top row where blocks spawn.

use log::debug;

use crate::block::Block;
use crate::square::Square;
use crate::types::{Color, Direction, FIELD_HEIGHT, FIELD_WIDTH};

/// The grid of settled squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Box<[Color]>,
}

impl Field {
    /// Create an empty field with the given dimensions
    pub fn new(width: u8, height: u8) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Color::Empty; len].into_boxed_slice(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * usize::from(self.width) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get the color at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the color at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// The cell at (x, y) as a square
    pub fn square(&self, x: i32, y: i32) -> Option<Square> {
        self.get(x, y).map(|color| Square::new(x, y, color))
    }

    /// Every cell as a square, row-major
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let width = usize::from(self.width);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &color)| Square::new((i % width) as i32, (i / width) as i32, color))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= i32::from(self.width) || y < 0 || y >= i32::from(self.height)
    }

    /// Check if position is occupied (within bounds and not empty)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if !c.is_empty())
    }

    /// Coordinates of every non-empty cell
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.squares()
            .filter(|s| !s.color().is_empty())
            .map(|s| s.cord())
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Color::is_empty)
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(row) => row.iter().all(|c| !c.is_empty()),
            None => false,
        }
    }

    /// Colors of row `y`
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= usize::from(self.height) {
            return None;
        }
        let width = usize::from(self.width);
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// True if the block overlaps any settled square or sticks out of the field.
    ///
    /// Checked right after a spawn: a fresh block that does not fit ends the game.
    pub fn judge_game_over(&self, block: &Block) -> bool {
        block
            .cords()
            .iter()
            .any(|&(x, y)| self.is_out_of_bounds(x, y) || self.is_occupied(x, y))
    }

    /// True if every square can move one cell in `direction`.
    ///
    /// Leaving the field is never legal, regardless of occupancy.
    pub fn judge_can_move(&self, block: &Block, direction: Direction) -> bool {
        self.cords_are_free(&block.moved_cords(direction))
    }

    /// True if the block's clockwise rotation fits without leaving the field or overlapping.
    pub fn judge_can_rotate(&self, block: &Block) -> bool {
        self.cords_are_free(&block.rotated_cords())
    }

    fn cords_are_free(&self, cords: &[(i32, i32)]) -> bool {
        if cords.iter().any(|&(x, y)| self.is_out_of_bounds(x, y)) {
            return false;
        }
        !cords.iter().any(|&(x, y)| self.is_occupied(x, y))
    }

    /// Copy the block's colors into the field at its coordinates.
    ///
    /// Squares outside the field are skipped.
    pub fn fix_block(&mut self, block: &Block) {
        for square in block.squares() {
            let (x, y) = square.cord();
            self.set(x, y, square.color());
        }
    }

    /// Remove every full row, shifting the rows above it down by one.
    ///
    /// Rows are scanned once from top (0) to bottom by index. When row `y` is
    /// full, rows `0..y` move down one and row 0 is emptied; the scan then
    /// continues at `y + 1`, which still holds its original contents. Returns
    /// the number of rows removed.
    pub fn delete_line(&mut self) -> usize {
        let width = usize::from(self.width);
        let mut removed = 0;

        for y in 0..usize::from(self.height) {
            if !self.is_row_full(y) {
                continue;
            }

            // copy_within handles the overlapping ranges
            for down_y in (1..=y).rev() {
                let src_start = (down_y - 1) * width;
                self.cells
                    .copy_within(src_start..src_start + width, down_y * width);
            }
            self.cells[..width].fill(Color::Empty);

            debug!("cleared row {}", y);
            removed += 1;
        }

        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Color::Empty);
    }

    /// Build a field from rows of text, one char per cell (test fixtures).
    ///
    /// `.` is empty; `R`, `B`, `G`, `O` are red, blue, green and orange.
    ///
    /// # Panics
    ///
    /// On more than 255 rows or columns, rows of unequal length, or any
    /// other character.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut field = Self::new(
            u8::try_from(width).expect("at most 255 columns"),
            u8::try_from(rows.len()).expect("at most 255 rows"),
        );
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "row {} has a different width", y);
            for (x, ch) in row.chars().enumerate() {
                let color = match ch {
                    '.' => Color::Empty,
                    'R' => Color::Red,
                    'B' => Color::Blue,
                    'G' => Color::Green,
                    'O' => Color::Orange,
                    other => panic!("unknown cell {:?} at ({}, {})", other, x, y),
                };
                field.set(x as i32, y as i32, color);
            }
        }
        field
    }

    /// Render as rows of text using the same alphabet as [`Field::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        (0..usize::from(self.height))
            .filter_map(|y| self.row(y))
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Color::Empty => '.',
                        Color::Red => 'R',
                        Color::Blue => 'B',
                        Color::Green => 'G',
                        Color::Orange => 'O',
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}
