//! Read-only view of game state handed to the renderer.
//!
//! The game owns its mutable state; after every processed event it exposes
//! a snapshot with everything needed to redraw the whole board.

use crate::piece::Piece;
use crate::types::{Cell, Shape, FIELD_HEIGHT, FIELD_WIDTH};

/// The active piece as the renderer sees it: shape plus absolute cells.
/// Cells above the field top (y < 0) are included; the view clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveView {
    pub shape: Shape,
    pub cells: [(i8, i8); 4],
}

impl From<&Piece> for ActiveView {
    fn from(piece: &Piece) -> Self {
        Self {
            shape: piece.shape(),
            cells: piece.cells(),
        }
    }
}

/// Full redraw state: locked board cells, the active piece, and whether
/// the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: ActiveView,
    pub game_over: bool,
}
