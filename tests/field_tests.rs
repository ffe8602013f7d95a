//! Field tests - bounds, collision, fixing and row clears

use tui_blocks::core::{Block, Field};
use tui_blocks::types::{Color, Direction, ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};

#[test]
fn test_field_new_empty() {
    let field = Field::default();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);
    assert!(field.is_empty());

    for y in 0..i32::from(FIELD_HEIGHT) {
        for x in 0..i32::from(FIELD_WIDTH) {
            assert_eq!(field.get(x, y), Some(Color::Empty), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_field_out_of_bounds() {
    let mut field = Field::new(4, 3);

    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);
    assert_eq!(field.get(4, 0), None);
    assert_eq!(field.get(0, 3), None);

    assert!(!field.set(4, 0, Color::Red));
    assert!(!field.set(0, -1, Color::Red));
    assert!(field.is_empty());

    // Out-of-bounds cells never count as occupied; callers check bounds first.
    assert!(field.is_out_of_bounds(-1, 0));
    assert!(!field.is_occupied(-1, 0));
}

#[test]
fn test_move_blocked_by_walls_and_floor() {
    let field = Field::default();
    let mut block = Block::new(ShapeKind::O, FIELD_WIDTH);

    while field.judge_can_move(&block, Direction::Left) {
        block.move_by(Direction::Left);
    }
    assert_eq!(block.origin().0, 0);

    while field.judge_can_move(&block, Direction::Right) {
        block.move_by(Direction::Right);
    }
    assert_eq!(block.origin().0, i32::from(FIELD_WIDTH) - 2);

    while field.judge_can_move(&block, Direction::Down) {
        block.move_by(Direction::Down);
    }
    assert_eq!(block.origin().1, i32::from(FIELD_HEIGHT) - 2);
}

#[test]
fn test_move_blocked_by_pile() {
    let mut field = Field::default();
    // O spawns on columns 4-5; put a square just below it.
    field.set(4, 2, Color::Green);
    let block = Block::new(ShapeKind::O, FIELD_WIDTH);

    assert!(!field.judge_can_move(&block, Direction::Down));
    assert!(field.judge_can_move(&block, Direction::Left));
    assert!(field.judge_can_move(&block, Direction::Right));
}

#[test]
fn test_fix_block_copies_colors() {
    let mut field = Field::default();
    let block = Block::new(ShapeKind::L, FIELD_WIDTH);

    field.fix_block(&block);

    for (x, y) in block.cords() {
        assert_eq!(field.get(x, y), Some(Color::Orange));
    }
    assert_eq!(field.occupied_cells().count(), 4);
}

#[test]
fn test_judge_game_over_on_overlap() {
    let mut field = Field::default();
    let block = Block::new(ShapeKind::I, FIELD_WIDTH);
    assert!(!field.judge_game_over(&block));

    field.set(5, 3, Color::Red);
    assert!(field.judge_game_over(&block));
}

#[test]
fn test_delete_line_without_full_rows() {
    let mut field = Field::from_rows(&["R...", ".B..", "GG.G"]);
    let before = field.clone();

    assert_eq!(field.delete_line(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_delete_line_shifts_rows_above() {
    let mut field = Field::from_rows(&["R...", "BBBB", ".G..", "OOOO"]);

    assert_eq!(field.delete_line(), 2);
    assert_eq!(field.to_rows(), vec!["....", "....", "R...", ".G.."]);
}

#[test]
fn test_delete_line_single_full_row() {
    let mut field = Field::from_rows(&["R...", ".G..", "BBBB", "O..O", ".R.R"]);

    assert_eq!(field.delete_line(), 1);
    // Rows above move down one; rows below the cleared row stay put.
    assert_eq!(
        field.to_rows(),
        vec!["....", "R...", ".G..", "O..O", ".R.R"]
    );
}

#[test]
fn test_delete_line_adjacent_full_rows() {
    let mut field = Field::from_rows(&["R...", "BBBB", "GGGG"]);

    assert_eq!(field.delete_line(), 2);
    assert_eq!(field.to_rows(), vec!["....", "....", "R..."]);
}

#[test]
fn test_delete_line_all_rows_full() {
    let mut field = Field::from_rows(&["RR", "BB", "GG"]);

    assert_eq!(field.delete_line(), 3);
    assert!(field.is_empty());
}

#[test]
fn test_rotation_blocked_at_wall() {
    let field = Field::default();
    let mut block = Block::new(ShapeKind::I, FIELD_WIDTH);
    for _ in 0..4 {
        block.move_by(Direction::Right);
    }

    // The bar sits in the last column; turning it would leave the field.
    assert_eq!(block.origin().0, i32::from(FIELD_WIDTH) - 1);
    assert!(!field.judge_can_rotate(&block));
}

#[test]
fn test_rotation_blocked_by_pile() {
    let mut field = Field::default();
    let block = Block::new(ShapeKind::I, FIELD_WIDTH);
    assert!(field.judge_can_rotate(&block));

    field.set(7, 0, Color::Blue);
    assert!(!field.judge_can_rotate(&block));
}
