//! Piece catalog and rotation tests

use falling_blocks::core::{rotate, shape_of, Shape};
use falling_blocks::types::PieceKind;

#[test]
fn test_canonical_matrices() {
    assert_eq!(
        shape_of(PieceKind::I).to_rows(),
        vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0]
        ]
    );
    assert_eq!(
        shape_of(PieceKind::J).to_rows(),
        vec![vec![2, 0, 0], vec![2, 2, 2], vec![0, 0, 0]]
    );
    assert_eq!(
        shape_of(PieceKind::L).to_rows(),
        vec![vec![0, 0, 3], vec![3, 3, 3], vec![0, 0, 0]]
    );
    assert_eq!(shape_of(PieceKind::O).to_rows(), vec![vec![4, 4], vec![4, 4]]);
    assert_eq!(
        shape_of(PieceKind::S).to_rows(),
        vec![vec![0, 5, 5], vec![5, 5, 0], vec![0, 0, 0]]
    );
    assert_eq!(
        shape_of(PieceKind::T).to_rows(),
        vec![vec![0, 6, 0], vec![6, 6, 6], vec![0, 0, 0]]
    );
    assert_eq!(
        shape_of(PieceKind::Z).to_rows(),
        vec![vec![7, 7, 0], vec![0, 7, 7], vec![0, 0, 0]]
    );
}

#[test]
fn test_cell_values_match_kind() {
    for kind in PieceKind::ALL {
        for (_, _, k) in shape_of(kind).minos() {
            assert_eq!(k, kind);
            assert_eq!(k.cell_value(), kind as u8 + 1);
        }
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let start = shape_of(kind);
        let mut shape = start;
        for _ in 0..4 {
            shape = rotate(&shape);
        }
        assert_eq!(shape, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_mino_count() {
    for kind in PieceKind::ALL {
        let mut shape = shape_of(kind);
        for _ in 0..4 {
            shape = rotate(&shape);
            assert_eq!(shape.minos().count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_i_rotates_to_vertical() {
    let vertical = rotate(&shape_of(PieceKind::I));
    assert_eq!(
        vertical.to_rows(),
        vec![
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0]
        ]
    );
}

#[test]
fn test_o_rotation_is_unchanged() {
    let o = shape_of(PieceKind::O);
    assert_eq!(rotate(&o), o);
}

#[test]
fn test_non_square_matrix_rotation() {
    let shape = Shape::from_rows(&[&[1, 2, 3], &[4, 5, 6]]);
    let once = rotate(&shape);
    assert_eq!((once.width(), once.height()), (2, 3));
    assert_eq!(once.to_rows(), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);

    let twice = rotate(&once);
    assert_eq!(twice.to_rows(), vec![vec![6, 5, 4], vec![3, 2, 1]]);
}
