//! Game lifecycle tests: gravity, locking, clearing, game over.

use blockfall::core::{Game, ScriptedShapes, Step};
use blockfall::types::{Command, Shape, FIELD_HEIGHT, FIELD_WIDTH};

fn game_with(shapes: Vec<Shape>) -> Game<ScriptedShapes> {
    Game::new(ScriptedShapes::new(shapes))
}

#[test]
fn test_o_piece_descends_then_moves_left() {
    let mut game = game_with(vec![Shape::O]);
    assert_eq!(game.piece.cells(), [(4, 0), (4, 1), (5, 0), (5, 1)]);

    for step in 1..=3 {
        assert_eq!(game.gravity_step(), Step::Descended);
        assert_eq!(game.piece.position(), (4, step));
    }

    game.apply(Command::MoveLeft);
    assert_eq!(game.piece.position(), (3, 3));
}

#[test]
fn test_gravity_locks_a_rested_piece_and_respawns() {
    let mut game = game_with(vec![Shape::O, Shape::T]);

    // Ride gravity all the way down.
    while game.gravity_step() == Step::Descended {}

    // The O locked at the bottom and the next scripted shape spawned.
    assert_eq!(game.piece.shape(), Shape::T);
    assert_eq!(game.piece.position().1, 0);
    let bottom = FIELD_HEIGHT as i8 - 1;
    assert_eq!(game.field.get(4, bottom), Some(Some(Shape::O)));
    assert_eq!(game.field.get(5, bottom), Some(Some(Shape::O)));
    assert!(!game.is_over());
}

#[test]
fn test_hard_drop_does_not_lock_until_the_next_gravity_step() {
    let mut game = game_with(vec![Shape::O, Shape::I]);

    game.apply(Command::HardDrop);
    let rested_y = game.piece.position().1;
    assert_eq!(rested_y, FIELD_HEIGHT as i8 - 2);

    // Still the falling piece: it can slide along the floor.
    game.apply(Command::MoveRight);
    assert_eq!(game.piece.position(), (5, rested_y));
    assert_eq!(game.piece.shape(), Shape::O);

    // Only the gravity step confirms rest and locks.
    assert_eq!(game.gravity_step(), Step::Locked { cleared: 0 });
    assert_eq!(game.piece.shape(), Shape::I);
    assert_eq!(game.field.get(5, FIELD_HEIGHT as i8 - 1), Some(Some(Shape::O)));
}

#[test]
fn test_lock_clears_a_completed_row() {
    let mut game = game_with(vec![Shape::I, Shape::O]);
    let bottom = FIELD_HEIGHT as i8 - 1;

    // Bottom row complete except the spawn column.
    for x in 0..FIELD_WIDTH as i8 {
        if x != 4 {
            game.field.set(x, bottom, Some(Shape::T));
        }
    }

    game.apply(Command::HardDrop);
    assert_eq!(game.gravity_step(), Step::Locked { cleared: 1 });

    // The completed row is gone; the I remnant shifted down onto the floor.
    assert!(!game.field.is_row_full(bottom as usize));
    assert_eq!(game.field.get(4, bottom), Some(Some(Shape::I)));
    assert_eq!(game.field.get(0, bottom), Some(None));
}

#[test]
fn test_game_over_when_piece_rests_above_the_field() {
    let mut game = game_with(vec![Shape::I]);

    // Nearly topped-out board: the two top rows are full except the spawn
    // column, and the spawn column itself is stacked from row 2 down.
    for x in 0..FIELD_WIDTH as i8 {
        if x != 4 {
            game.field.set(x, 0, Some(Shape::Z));
            game.field.set(x, 1, Some(Shape::Z));
        }
    }
    for y in 2..FIELD_HEIGHT as i8 {
        game.field.set(4, y, Some(Shape::Z));
    }

    // The 4-tall I spawns straddling the top and can never descend.
    assert!(!game.piece.is_fully_visible());
    assert_eq!(game.gravity_step(), Step::GameOver);
    assert!(game.is_over());
}

#[test]
fn test_game_over_is_terminal() {
    let mut game = game_with(vec![Shape::I]);
    for y in 2..FIELD_HEIGHT as i8 {
        game.field.set(4, y, Some(Shape::Z));
    }
    assert_eq!(game.gravity_step(), Step::GameOver);

    let frozen = game.snapshot();
    game.apply(Command::MoveLeft);
    game.apply(Command::Rotate);
    game.apply(Command::HardDrop);
    assert_eq!(game.gravity_step(), Step::GameOver);
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_normal_lock_is_not_game_over() {
    // A piece resting on the floor while fully visible locks normally.
    let mut game = game_with(vec![Shape::T, Shape::T]);
    game.apply(Command::HardDrop);
    assert!(game.piece.is_fully_visible());
    assert!(matches!(game.gravity_step(), Step::Locked { .. }));
    assert!(!game.is_over());
}

#[test]
fn test_snapshot_reflects_field_and_piece() {
    let mut game = game_with(vec![Shape::O, Shape::I]);
    game.apply(Command::HardDrop);
    game.gravity_step();

    let snap = game.snapshot();
    assert!(!snap.game_over);
    assert_eq!(snap.active.shape, Shape::I);
    assert_eq!(snap.active.cells, game.piece.cells());

    let locked = snap
        .board
        .iter()
        .flatten()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(locked, 4);
    let bottom = FIELD_HEIGHT as usize - 1;
    assert_eq!(snap.board[bottom][4], Some(Shape::O));
}
