//! Field tests: occupancy, locking, and line-clear compaction.

use blockfall::core::{Field, Piece};
use blockfall::types::{Cell, Shape, FIELD_HEIGHT, FIELD_WIDTH};

const W: i8 = FIELD_WIDTH as i8;
const H: i8 = FIELD_HEIGHT as i8;

fn fill_row_except(field: &mut Field, y: i8, hole_x: i8, shape: Shape) {
    for x in 0..W {
        if x != hole_x {
            field.set(x, y, Some(shape));
        }
    }
}

fn column(field: &Field, x: i8) -> Vec<Cell> {
    (0..H).map(|y| field.get(x, y).unwrap()).collect()
}

#[test]
fn test_new_field_is_free_everywhere() {
    let field = Field::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);
    for y in 0..H {
        for x in 0..W {
            assert!(field.is_free(x, y));
        }
    }
}

#[test]
fn test_out_of_bounds_is_not_free() {
    let field = Field::new();
    assert!(!field.is_free(-1, 0));
    assert!(!field.is_free(W, 0));
    assert!(!field.is_free(0, -1));
    assert!(!field.is_free(0, H));
}

#[test]
fn test_place_bakes_the_piece_cells() {
    let mut field = Field::new();
    let mut piece = Piece::spawn(Shape::O);
    piece.full_down(&field);
    field.place(&piece);

    for (x, y) in piece.cells() {
        assert_eq!(field.get(x, y), Some(Some(Shape::O)));
    }
    let occupied = (0..H)
        .flat_map(|y| (0..W).map(move |x| (x, y)))
        .filter(|&(x, y)| !field.is_free(x, y))
        .count();
    assert_eq!(occupied, 4);
}

#[test]
fn test_is_row_full() {
    let mut field = Field::new();
    assert!(!field.is_row_full(5));

    fill_row_except(&mut field, 5, -1, Shape::T);
    assert!(field.is_row_full(5));

    fill_row_except(&mut field, 6, 3, Shape::T);
    assert!(!field.is_row_full(6));
}

#[test]
fn test_clear_bottom_row_filled_by_a_locked_piece() {
    let mut field = Field::new();
    // Bottom row full except the spawn column.
    fill_row_except(&mut field, H - 1, 4, Shape::T);

    // Drop a vertical I into the hole and lock it.
    let mut piece = Piece::spawn(Shape::I);
    piece.full_down(&field);
    field.place(&piece);
    assert!(field.is_row_full(H as usize - 1));

    assert_eq!(field.clear_full_lines(), 1);

    // The full row is gone; the I remnant above it shifted down one row.
    assert!(!field.is_row_full(H as usize - 1));
    for x in 0..W {
        let expected = if x == 4 { Some(Shape::I) } else { None };
        assert_eq!(field.get(x, H - 1), Some(expected), "column {x}");
    }
    assert_eq!(field.get(4, H - 2), Some(Some(Shape::I)));
}

#[test]
fn test_compaction_preserves_column_order() {
    let mut field = Field::new();
    // Two full rows with survivors scattered around them.
    fill_row_except(&mut field, H - 1, -1, Shape::O);
    fill_row_except(&mut field, H - 3, -1, Shape::S);
    field.set(0, H - 2, Some(Shape::J));
    field.set(2, H - 4, Some(Shape::L));
    field.set(2, H - 5, Some(Shape::T));

    // Expected per column: the pre-clear sequence with full rows removed
    // and as many free rows prepended at the top.
    let full_rows = [H - 1, H - 3];
    let mut expected: Vec<Vec<Cell>> = Vec::new();
    for x in 0..W {
        let survivors: Vec<Cell> = (0..H)
            .filter(|y| !full_rows.contains(y))
            .map(|y| field.get(x, y).unwrap())
            .collect();
        let mut col = vec![None; full_rows.len()];
        col.extend(survivors);
        expected.push(col);
    }

    assert_eq!(field.clear_full_lines(), 2);
    for x in 0..W {
        assert_eq!(column(&field, x), expected[x as usize], "column {x}");
    }
}

#[test]
fn test_clear_multiple_rows_shifts_markers_by_rows_below() {
    let mut field = Field::new();
    fill_row_except(&mut field, 5, -1, Shape::T);
    fill_row_except(&mut field, 10, -1, Shape::I);
    fill_row_except(&mut field, 15, -1, Shape::O);

    field.set(0, 4, Some(Shape::J)); // above all three full rows
    field.set(0, 9, Some(Shape::L)); // above two of them
    field.set(0, 14, Some(Shape::S)); // above one

    assert_eq!(field.clear_full_lines(), 3);

    assert_eq!(field.get(0, 7), Some(Some(Shape::J)));
    assert_eq!(field.get(0, 11), Some(Some(Shape::L)));
    assert_eq!(field.get(0, 15), Some(Some(Shape::S)));
    assert_eq!(field.get(0, 4), Some(None));
    assert_eq!(field.get(0, 9), Some(None));
    assert_eq!(field.get(0, 14), Some(None));
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut field = Field::new();
    fill_row_except(&mut field, H - 1, -1, Shape::Z);
    fill_row_except(&mut field, H - 2, -1, Shape::Z);
    field.set(3, H - 3, Some(Shape::T));

    assert_eq!(field.clear_full_lines(), 2);
    assert_eq!(field.get(3, H - 1), Some(Some(Shape::T)));
    assert_eq!(field.get(3, H - 3), Some(None));
}

#[test]
fn test_clear_on_empty_field_does_nothing() {
    let mut field = Field::new();
    assert_eq!(field.clear_full_lines(), 0);
    assert_eq!(field, Field::new());
}
