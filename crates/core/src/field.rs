//! Field module - the 10x20 playfield.
//!
//! Cells hold the shape tag of the piece that locked there, or nothing.
//! Uses a flat array in row-major order for cache locality and
//! zero-allocation. Coordinates: (x, y) with x 0..9 left to right and
//! y 0..19 top to bottom. Rows above the field (y < 0) are not stored;
//! the active piece treats them as always passable.

use crate::piece::Piece;
use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field.
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The playfield - 10 columns x 20 rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new field with every cell free.
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is within bounds and unoccupied.
    ///
    /// Out-of-bounds coordinates are reported as not free; the piece layer
    /// applies the "above the field is passable" rule before asking.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff every cell of row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = y * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Bake a resting piece into the field.
    ///
    /// # Panics
    ///
    /// Panics if any of the piece's cells is out of bounds. The engine must
    /// have validated fit before locking, so this is a programmer error.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            let idx = Self::index(x, y)
                .unwrap_or_else(|| panic!("locking piece cell ({x}, {y}) outside field"));
            self.cells[idx] = Some(piece.shape());
        }
    }

    /// Remove every full row, shifting the rows above it down by one.
    ///
    /// Iterative bottom-up scan: whenever a full row is compacted away, the
    /// scan restarts from the bottom because the row indices above the
    /// removed row have shifted. Returns the number of rows cleared.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        'scan: loop {
            for y in (0..FIELD_HEIGHT as usize).rev() {
                if self.is_row_full(y) {
                    self.drop_rows_above(y);
                    cleared += 1;
                    continue 'scan;
                }
            }
            return cleared;
        }
    }

    /// Shift rows 0..y down by one, overwriting row `y`, and free the top row.
    fn drop_rows_above(&mut self, y: usize) {
        let width = FIELD_WIDTH as usize;
        for dst in (1..=y).rev() {
            let src_start = (dst - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, dst * width);
        }
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
