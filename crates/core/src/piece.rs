//! Piece module - the currently falling piece.
//!
//! A piece is an anchor coordinate plus 4 cell offsets resolved from the
//! catalog for its (shape, angle). Movement and rotation are tentative:
//! the piece mutates, checks fit against the field, and reverts on misfit.
//! The field is never mutated here.

use crate::catalog::{angle_cycle, offsets, CellOffsets};
use crate::field::Field;
use crate::types::{Angle, Shape, FIELD_HEIGHT, FIELD_WIDTH, SPAWN_X, SPAWN_Y};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    /// Index into the shape's angle cycle.
    angle_index: usize,
    x: i8,
    y: i8,
    offsets: CellOffsets,
}

impl Piece {
    /// Create a piece at the spawn anchor, in the first angle of its cycle.
    ///
    /// Spawning never checks fit; multi-cell pieces may straddle the top
    /// boundary and a blocked field is only detected on the next gravity
    /// step that fails while the piece is still partly above the field.
    pub fn spawn(shape: Shape) -> Self {
        let angle = angle_cycle(shape)[0];
        Self {
            shape,
            angle_index: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
            offsets: offsets(shape, angle),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn angle(&self) -> Angle {
        angle_cycle(self.shape)[self.angle_index]
    }

    /// Anchor coordinate.
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// The piece's 4 absolute cells: anchor + offset.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// True iff every cell is horizontally in bounds, above the floor, and
    /// either above the field top or on a free field cell.
    pub fn fits(&self, field: &Field) -> bool {
        self.cells().iter().all(|&(x, y)| {
            if x < 0 || x >= FIELD_WIDTH as i8 || y >= FIELD_HEIGHT as i8 {
                return false;
            }
            y < 0 || field.is_free(x, y)
        })
    }

    /// True iff every cell is within the visible field (y >= 0).
    ///
    /// Distinguishes a piece resting normally from one that cannot descend
    /// while still straddling the top boundary, which is game over.
    pub fn is_fully_visible(&self) -> bool {
        self.cells().iter().all(|&(_, y)| y >= 0)
    }

    /// Advance to the next angle in the shape's cycle; revert if the new
    /// configuration does not fit. No wall-kick adjustment is attempted.
    pub fn rotate(&mut self, field: &Field) {
        let cycle = angle_cycle(self.shape);
        let prev = self.angle_index;
        self.angle_index = (self.angle_index + 1) % cycle.len();
        self.offsets = offsets(self.shape, cycle[self.angle_index]);
        if !self.fits(field) {
            self.angle_index = prev;
            self.offsets = offsets(self.shape, cycle[prev]);
        }
    }

    pub fn move_left(&mut self, field: &Field) {
        self.x -= 1;
        if !self.fits(field) {
            self.x += 1;
        }
    }

    pub fn move_right(&mut self, field: &Field) {
        self.x += 1;
        if !self.fits(field) {
            self.x -= 1;
        }
    }

    /// Descend one row. Returns false (and stays put) if the piece cannot
    /// descend further.
    pub fn move_down(&mut self, field: &Field) -> bool {
        self.y += 1;
        if !self.fits(field) {
            self.y -= 1;
            return false;
        }
        true
    }

    /// Hard drop: descend until resting. Does not lock the piece.
    pub fn full_down(&mut self, field: &Field) {
        while self.move_down(field) {}
    }

    /// Ascend one row if that fits. Debug aid, no game meaning.
    pub fn move_up(&mut self, field: &Field) {
        self.y -= 1;
        if !self.fits(field) {
            self.y += 1;
        }
    }
}
