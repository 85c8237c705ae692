//! Material evaluation tests.

use crate::board::{Board, CHECKMATE_SCORE, STALEMATE_SCORE};

#[test]
fn test_initial_position_is_balanced() {
    let board = Board::new();
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_material_sum_is_white_positive() {
    // White: rook (5). Black: two pawns (2).
    let board = Board::from_fen("4k3/pp6/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(board.evaluate(), 3);
}

#[test]
fn test_piece_values() {
    assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/P3K3 w - - 0 1").evaluate(), 1);
    assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").evaluate(), 3);
    assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/B3K3 w - - 0 1").evaluate(), 3);
    assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").evaluate(), 5);
    assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").evaluate(), 10);
}

#[test]
fn test_kings_carry_no_material() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_color_swap_negates_score() {
    let a = Board::from_fen("4k3/8/8/8/8/8/8/QN2K3 w - - 0 1");
    let b = Board::from_fen("qn2k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(a.evaluate(), 13);
    assert_eq!(a.evaluate(), -b.evaluate());
}

#[test]
fn test_checkmated_white_scores_minus_mate() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/r7/r3K3 w - - 0 1");
    assert!(board.legal_moves().is_empty());
    assert!(board.checkmate());
    assert_eq!(board.evaluate(), -CHECKMATE_SCORE);
}

#[test]
fn test_checkmated_black_scores_plus_mate() {
    let mut board = Board::from_fen("R3k3/R7/8/8/8/8/8/4K3 b - - 0 1");
    assert!(board.legal_moves().is_empty());
    assert!(board.checkmate());
    assert_eq!(board.evaluate(), CHECKMATE_SCORE);
}

#[test]
fn test_stalemate_scores_zero_despite_material() {
    // White is a full queen up, but the stalemated position is drawn.
    let mut board = Board::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1");
    assert!(board.legal_moves().is_empty());
    assert!(board.stalemate());
    assert_eq!(board.evaluate(), STALEMATE_SCORE);
}

#[test]
fn test_mate_outweighs_any_material() {
    // Full starting material is far below the mate score.
    let board = Board::new();
    let mut total = 0;
    for rank in 0..8 {
        for file in 0..8 {
            if let Some((_, piece)) = board.piece_at(crate::board::Square(rank, file)) {
                total += piece.value();
            }
        }
    }
    assert!(total < CHECKMATE_SCORE);
}
