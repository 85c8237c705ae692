//! Negamax search with alpha-beta pruning.
//!
//! The search walks the legal-move tree depth-first, mutating the one
//! shared [`Board`] through make/undo rather than copying it. Every
//! `make_move` along a recursive path is paired with exactly one
//! `undo_move` before returning to the parent, including on pruning exits.
//! Scores are always reported from the current mover's perspective and
//! negated on the way up (negamax); the material evaluator supplies leaf
//! values and the checkmate/stalemate branch supplies terminal ones.

use rand::seq::SliceRandom;
use rand::Rng;

use super::eval::CHECKMATE_SCORE;
use super::{Board, Move};

/// Fixed search depth used when the caller has no preference
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Pick the best move for the side to move by searching `depth` plies.
///
/// `legal_moves` must be the current position's legal moves. The root
/// candidates are shuffled first so ties are not resolved by the
/// generator's board-scan order. Returns `None` when the move list is
/// empty (a terminal position) or `depth` is zero (search disabled; use
/// [`find_random_move`] instead).
pub fn find_best_move(board: &mut Board, legal_moves: &[Move], depth: u32) -> Option<Move> {
    if depth == 0 {
        return None;
    }

    let mut candidates = legal_moves.to_vec();
    candidates.shuffle(&mut rand::thread_rng());

    let sign = board.side_to_move().sign();
    let beta = CHECKMATE_SCORE;
    let mut alpha = -CHECKMATE_SCORE;
    let mut best_score = -CHECKMATE_SCORE;
    let mut best_move = None;

    for mv in candidates {
        board.make_move(mv);
        let replies = board.legal_moves();
        let score = -negamax(board, &replies, depth - 1, -beta, -alpha, -sign);
        board.undo_move();

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    #[cfg(feature = "logging")]
    if let Some(mv) = best_move {
        log::debug!("depth {depth}: best move {mv} (score {best_score})");
    }

    best_move
}

/// Negamax with an alpha-beta window.
///
/// `moves` is the legal-move list of the current node, produced by the
/// caller's `legal_moves` call after entering this position (which also set
/// the terminal flags the evaluator reads). `sign` is +1 when White is to
/// move. The returned score is from the current mover's perspective.
fn negamax(
    board: &mut Board,
    moves: &[Move],
    depth: u32,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> i32 {
    // Leaves and terminal nodes (no legal moves) both score through the
    // evaluator; its checkmate/stalemate branch covers the terminal case.
    if depth == 0 || moves.is_empty() {
        return sign * board.evaluate();
    }

    let mut best_score = -CHECKMATE_SCORE;
    for &mv in moves {
        board.make_move(mv);
        let replies = board.legal_moves();
        let score = -negamax(board, &replies, depth - 1, -beta, -alpha, -sign);
        board.undo_move();

        if score > best_score {
            best_score = score;
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            // Later siblings cannot beat a line the opponent already
            // refuses to allow.
            break;
        }
    }
    best_score
}

/// Uniformly random fallback used when the search is disabled.
///
/// Returns `None` when the move list is empty.
pub fn find_random_move(legal_moves: &[Move]) -> Option<Move> {
    if legal_moves.is_empty() {
        return None;
    }
    let idx = rand::thread_rng().gen_range(0..legal_moves.len());
    Some(legal_moves[idx])
}
