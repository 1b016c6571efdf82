//! Board tests - grid access, collision, merging and line clearing

use falling_blocks::core::{shape_of, Board, BoardConfig, ConfigError, Shape};
use falling_blocks::types::{PieceKind, BOARD_WIDTH, HIDDEN_ROWS, TOTAL_ROWS, VISIBLE_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), TOTAL_ROWS as u16);
    assert_eq!(board.hidden_rows(), HIDDEN_ROWS);
    assert_eq!(board.visible_rows(), VISIBLE_ROWS);

    for y in 0..board.height() as i16 {
        for x in 0..board.width() as i16 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, TOTAL_ROWS as i16), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, TOTAL_ROWS as i16, Some(PieceKind::T)));
}

#[test]
fn test_collides_with_walls_and_floor() {
    let board = Board::new();
    let o = shape_of(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 22));
    assert!(board.collides(&o, -1, 0), "left wall");
    assert!(board.collides(&o, 9, 0), "right wall");
    assert!(board.collides(&o, 0, 23), "floor");
}

#[test]
fn test_cells_above_the_grid_do_not_collide() {
    let board = Board::new();
    let o = shape_of(PieceKind::O);
    // Top row of the piece sits at y = -1.
    assert!(!board.collides(&o, 4, -1));
    // Still blocked by the walls up there.
    assert!(board.collides(&o, -1, -1));
}

#[test]
fn test_collides_with_settled_blocks() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::Z));
    let t = shape_of(PieceKind::T);

    // T occupies (x+1, y) and (x..x+3, y+1).
    assert!(board.collides(&t, 3, 10));
    assert!(board.collides(&t, 2, 9));
    assert!(!board.collides(&t, 5, 9));
}

#[test]
fn test_merge_writes_piece_cells_and_skips_outside() {
    let mut board = Board::new();
    let i = shape_of(PieceKind::I);
    board.merge(&i, 3, 22);
    for x in 3..7 {
        assert_eq!(board.get(x, 23), Some(Some(PieceKind::I)));
    }
    assert_eq!(board.get(2, 23), Some(None));

    // The filled row of I lands at y = -1 and is dropped.
    let mut top = Board::new();
    top.merge(&i, 0, -2);
    assert!(top.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let config = BoardConfig::new(4, 6, 2);
    let mut board = Board::with_config(config).unwrap();
    let height = board.height() as i16;

    for y in 0..height {
        if y == 2 || y == 5 {
            for x in 0..4 {
                board.set(x, y, Some(PieceKind::I));
            }
        } else {
            let kind = PieceKind::from_cell_value((y % 7) as u8 + 1);
            board.set(y % 4, y, kind);
        }
    }
    let survivors: Vec<Vec<_>> = [0usize, 1, 3, 4, 6, 7]
        .iter()
        .map(|&y| board.row(y).unwrap().to_vec())
        .collect();

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.height(), height as u16);

    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
    assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
    for (i, expected) in survivors.iter().enumerate() {
        assert_eq!(board.row(i + 2).unwrap(), expected.as_slice(), "row {}", i + 2);
    }
}

#[test]
fn test_clear_with_no_full_rows_is_noop() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 23, Some(PieceKind::L));
    }
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_in_hidden_area() {
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 1, Some(PieceKind::S));
    }
    board.set(0, 0, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 0), Some(None));
}

#[test]
fn test_dump_marks_hidden_and_visible_rows() {
    let mut board = Board::new();
    board.set(0, 23, Some(PieceKind::Z));
    board.set(9, 0, Some(PieceKind::I));

    let dump = board.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 24);
    assert_eq!(lines[0], "H00 0000000001");
    assert_eq!(lines[3], "H03 0000000000");
    assert_eq!(lines[4], "V04 0000000000");
    assert_eq!(lines[23], "V23 7000000000");
}

#[test]
fn test_from_rows_is_bottom_aligned() {
    let board = Board::from_rows(
        BoardConfig::default(),
        &[&[0, 0, 0, 0, 0, 0, 0, 0, 0, 4], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 0]],
    )
    .unwrap();
    assert_eq!(board.get(9, 22), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 23), Some(Some(PieceKind::I)));
    assert!(!board.is_row_full(23));
}

#[test]
fn test_invalid_config_rejected() {
    assert_eq!(
        Board::with_config(BoardConfig::new(0, 20, 4)),
        Err(ConfigError::ZeroWidth)
    );
    assert_eq!(
        Board::with_config(BoardConfig::new(10, 0, 4)),
        Err(ConfigError::ZeroVisibleRows)
    );
    assert!(matches!(
        Board::with_config(BoardConfig::new(3, 20, 4)),
        Err(ConfigError::TooNarrow { .. })
    ));
    assert!(matches!(
        Board::with_config(BoardConfig::new(10, 250, 10)),
        Err(ConfigError::TooTall { .. })
    ));
}

#[test]
fn test_custom_shape_collision_uses_only_filled_cells() {
    let board = Board::new();
    // Empty left column: the shape can hang over the left wall.
    let shape = Shape::from_rows(&[&[0, 6], &[0, 6]]);
    assert!(!board.collides(&shape, -1, 0));
}
