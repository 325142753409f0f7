//! Game module - the spawn/fall/lock lifecycle.
//!
//! `Game` is the sole owner and mutator of the field and the active piece.
//! It consumes player commands and gravity steps one at a time and reports
//! outcomes as plain values; rejected moves and game over are normal
//! control flow, not errors.

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::ShapeSource;
use crate::snapshot::{ActiveView, GameSnapshot};
use crate::types::{Command, FIELD_HEIGHT, FIELD_WIDTH};

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece descended one row.
    Descended,
    /// The piece rested, was baked into the field, full lines were cleared
    /// and a new piece spawned.
    Locked { cleared: usize },
    /// The piece could not descend while still partly above the field.
    /// Terminal; all further steps and commands are no-ops.
    GameOver,
}

pub struct Game<R: ShapeSource> {
    pub field: Field,
    pub piece: Piece,
    rng: R,
    over: bool,
}

impl<R: ShapeSource> Game<R> {
    /// Create a fresh game: empty field, first piece spawned.
    pub fn new(mut rng: R) -> Self {
        let piece = Piece::spawn(rng.next_shape());
        Self {
            field: Field::new(),
            piece,
            rng,
            over: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Apply a player command to the active piece.
    ///
    /// Commands never lock the piece: a soft drop that cannot descend and a
    /// hard drop that reaches the floor both leave the piece falling until
    /// the next gravity step confirms it is stuck. `Quit` is handled by the
    /// surrounding loop and ignored here.
    pub fn apply(&mut self, command: Command) {
        if self.over {
            return;
        }
        match command {
            Command::MoveLeft => self.piece.move_left(&self.field),
            Command::MoveRight => self.piece.move_right(&self.field),
            Command::SoftDrop => {
                let _ = self.piece.move_down(&self.field);
            }
            Command::Rotate => self.piece.rotate(&self.field),
            Command::HardDrop => self.piece.full_down(&self.field),
            Command::DebugUp => self.piece.move_up(&self.field),
            Command::Quit => {}
        }
    }

    /// Advance the game by one gravity step.
    pub fn gravity_step(&mut self) -> Step {
        if self.over {
            return Step::GameOver;
        }
        if self.piece.move_down(&self.field) {
            return Step::Descended;
        }
        if !self.piece.is_fully_visible() {
            self.over = true;
            return Step::GameOver;
        }
        self.field.place(&self.piece);
        let cleared = self.field.clear_full_lines();
        self.piece = Piece::spawn(self.rng.next_shape());
        Step::Locked { cleared }
    }

    /// Read-only state for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[None; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        for (y, row) in board.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.field.get(x as i8, y as i8).unwrap_or(None);
            }
        }
        GameSnapshot {
            board,
            active: ActiveView::from(&self.piece),
            game_over: self.over,
        }
    }
}
