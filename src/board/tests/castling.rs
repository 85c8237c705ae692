//! Castling availability and rights bookkeeping tests.

use crate::board::{Board, Color, Move, Square};

fn castle_to(board: &mut Board, from: Square, to: Square) -> Option<Move> {
    board
        .legal_moves()
        .into_iter()
        .find(|m| m.is_castle && m.from == from && m.to == to)
}

#[test]
fn test_all_four_castles_available() {
    let mut white = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(castle_to(&mut white, Square(0, 4), Square(0, 6)).is_some());
    assert!(castle_to(&mut white, Square(0, 4), Square(0, 2)).is_some());

    let mut black = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    assert!(castle_to(&mut black, Square(7, 4), Square(7, 6)).is_some());
    assert!(castle_to(&mut black, Square(7, 4), Square(7, 2)).is_some());
}

#[test]
fn test_castle_requires_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 6)).is_none());
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 2)).is_some());
}

#[test]
fn test_castle_requires_empty_between() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 6)).is_none());
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 2)).is_none());
}

#[test]
fn test_castle_blocked_by_attacked_transit_square() {
    // The black rook on f8 covers f1, so kingside castling is illegal while
    // queenside remains available.
    let mut board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 6)).is_none());
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 2)).is_some());
}

#[test]
fn test_no_castle_while_in_check() {
    let mut board = Board::from_fen("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1");
    assert!(board.in_check(Color::White));
    assert!(!board.legal_moves().iter().any(|m| m.is_castle));
}

#[test]
fn test_attacked_queenside_b_file_does_not_block() {
    // Only the squares the king crosses matter; b1 may be attacked.
    let mut board = Board::from_fen("r3k2r/8/8/8/8/1r6/8/R3K2R w KQkq - 0 1");
    assert!(castle_to(&mut board, Square(0, 4), Square(0, 2)).is_some());
}

#[test]
fn test_king_move_revokes_both_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(0, 4) && m.to == Square(1, 4))
        .unwrap();
    board.make_move(mv);

    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert!(rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));
}

#[test]
fn test_rook_move_revokes_one_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(0, 7) && m.to == Square(0, 6))
        .unwrap();
    board.make_move(mv);

    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
}

#[test]
fn test_rook_capture_on_home_square_revokes_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(1, 6) && m.to == Square(7, 0))
        .unwrap();
    assert!(mv.is_capture());
    board.make_move(mv);

    let rights = board.castling_rights();
    assert!(!rights.has(Color::Black, false));
    assert!(rights.has(Color::Black, true));
    assert!(rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
}

#[test]
fn test_rights_restored_only_by_undoing_the_revoking_move() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    let king_move = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(0, 4) && m.to == Square(1, 4))
        .unwrap();
    board.make_move(king_move);
    assert!(!board.castling_rights().has(Color::White, true));

    let reply = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(7, 4) && m.to == Square(6, 4))
        .unwrap();
    board.make_move(reply);

    // Undoing the reply does not resurrect White's rights.
    board.undo_move();
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));

    // Undoing the king move does.
    board.undo_move();
    assert!(board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));
}
