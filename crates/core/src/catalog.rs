//! Shape catalog: per-shape rotation cycles and relative cell offsets.
//!
//! Pure static data. Every (shape, angle) pair inside a shape's cycle maps
//! to exactly 4 offsets from the piece anchor. Asking for a pair outside the
//! catalog is a programmer error and panics.

use crate::types::{Angle, Shape};

/// Relative displacement of one cell from the piece anchor.
pub type Offset = (i8, i8);

/// The 4 cells of a piece, relative to its anchor.
pub type CellOffsets = [Offset; 4];

/// The cyclic ordered set of angles a shape rotates through.
///
/// O has a single orientation; Z, S and I have two; T, L and J have four.
/// Rotation always advances to the next entry, wrapping to the first.
pub fn angle_cycle(shape: Shape) -> &'static [Angle] {
    use Angle::*;
    match shape {
        Shape::O => &[Clock12],
        Shape::Z | Shape::S | Shape::I => &[Clock12, Clock3],
        Shape::T | Shape::L | Shape::J => &[Clock12, Clock3, Clock6, Clock9],
    }
}

/// The 4 cell offsets for a shape at a given angle.
///
/// # Panics
///
/// Panics if `angle` is not in `shape`'s cycle. Callers must only pass
/// angles obtained from [`angle_cycle`].
pub fn offsets(shape: Shape, angle: Angle) -> CellOffsets {
    use Angle::*;
    match (shape, angle) {
        (Shape::O, Clock12) => [(0, 0), (0, 1), (1, 0), (1, 1)],

        (Shape::Z, Clock12) => [(0, 0), (0, 1), (1, 0), (1, -1)],
        (Shape::Z, Clock3) => [(0, 0), (1, 0), (1, 1), (2, 1)],

        (Shape::S, Clock12) => [(0, -1), (0, 0), (1, 0), (1, 1)],
        (Shape::S, Clock3) => [(0, 1), (1, 1), (1, 0), (2, 0)],

        (Shape::I, Clock12) => [(0, -1), (0, 0), (0, 1), (0, 2)],
        (Shape::I, Clock3) => [(-1, 1), (0, 1), (1, 1), (2, 1)],

        (Shape::T, Clock12) => [(0, 0), (-1, 1), (0, 1), (1, 1)],
        (Shape::T, Clock3) => [(0, 0), (0, 1), (0, 2), (1, 1)],
        (Shape::T, Clock6) => [(-1, 1), (0, 1), (1, 1), (0, 2)],
        (Shape::T, Clock9) => [(-1, 1), (0, 1), (0, 0), (0, 2)],

        (Shape::L, Clock12) => [(0, -1), (0, 0), (0, 1), (1, 1)],
        (Shape::L, Clock3) => [(0, 1), (0, 0), (1, 0), (2, 0)],
        (Shape::L, Clock6) => [(0, -1), (1, -1), (1, 0), (1, 1)],
        (Shape::L, Clock9) => [(1, 0), (1, 1), (0, 1), (-1, 1)],

        (Shape::J, Clock12) => [(0, 1), (1, 1), (1, 0), (1, -1)],
        (Shape::J, Clock3) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (Shape::J, Clock6) => [(0, 1), (0, 0), (0, -1), (1, -1)],
        (Shape::J, Clock9) => [(-1, 0), (0, 0), (1, 1), (1, 0)],

        (shape, angle) => panic!("no offsets for {shape:?} at {angle:?}"),
    }
}
