//! Shape module - block templates and matrix rotation
//!
//! Every block template is a small 0/1 matrix. Row `r`, column `c` set to 1
//! means the square at `origin + (c, r)` is occupied. Rotation turns the
//! matrix 90° clockwise (transpose, then reverse each row).

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest matrix side a shape can have
pub const MAX_SIDE: usize = 4;

/// Offset of a single occupied cell relative to the matrix origin, as `(col, row)`
pub type CellOffset = (u8, u8);

/// A rows x cols occupancy matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[u8; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Build a shape from matrix rows.
    ///
    /// Rows and columns past [`MAX_SIDE`] are ignored; any non-zero entry counts as occupied.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut bits = [[0u8; MAX_SIDE]; MAX_SIDE];
        let n_rows = rows.len().min(MAX_SIDE);
        let n_cols = rows.iter().map(|r| r.len()).max().unwrap_or(0).min(MAX_SIDE);
        for (r, row) in rows.iter().take(n_rows).enumerate() {
            for (c, &v) in row.iter().take(n_cols).enumerate() {
                bits[r][c] = u8::from(v != 0);
            }
        }
        Self {
            rows: n_rows as u8,
            cols: n_cols as u8,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Matrix entry at `(row, col)`, 0 outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows() || col >= self.cols() {
            return 0;
        }
        self.bits[row][col]
    }

    /// Matrix rows as vectors (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| self.bits[r][..self.cols()].to_vec())
            .collect()
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> ArrayVec<CellOffset, { MAX_SIDE * MAX_SIDE }> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] != 0 {
                    out.push((c as u8, r as u8));
                }
            }
        }
        out
    }

    /// The column-reversed transpose: this shape turned 90° clockwise.
    ///
    /// `turned[r][c] = self[rows - 1 - c][r]`, so the result is cols x rows.
    pub fn turned(&self) -> Self {
        let mut bits = [[0u8; MAX_SIDE]; MAX_SIDE];
        let rows = self.rows();
        for (r, out_row) in bits.iter_mut().enumerate().take(self.cols()) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// Template matrix for a block kind
pub fn template(kind: ShapeKind) -> Shape {
    match kind {
        // Vertical bar
        ShapeKind::I => Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 0], &[1, 0]]),
        // 2x2 square
        ShapeKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        // Top bar with the long side hanging on the right
        ShapeKind::J => Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1], &[0, 0]]),
        // Top bar with the long side hanging on the left
        ShapeKind::L => Shape::from_rows(&[&[1, 1], &[1, 0], &[1, 0], &[0, 0]]),
    }
}

/// Field-space origin (matrix top-left) for a freshly spawned block.
///
/// The I bar's occupied column sits at `width / 2`; the two-column shapes
/// straddle `width / 2 - 1` and `width / 2`.
pub fn spawn_origin(kind: ShapeKind, field_width: u8) -> (i32, i32) {
    let center = i32::from(field_width / 2);
    match kind {
        ShapeKind::I => (center, 0),
        ShapeKind::O | ShapeKind::J | ShapeKind::L => (center - 1, 0),
    }
}
