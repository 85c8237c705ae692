//! Chess rules engine and move search.
//!
//! [`Board`] owns the full game state: piece placement, side to move,
//! castling rights, en passant target, and the history stack that makes
//! [`Board::make_move`] / [`Board::undo_move`] exact inverses. Legal moves
//! come from [`Board::legal_moves`], which also sets the checkmate and
//! stalemate flags the evaluator reads. [`find_best_move`] runs a negamax
//! alpha-beta search over that interface.

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, SquareError};
pub use eval::{CHECKMATE_SCORE, STALEMATE_SCORE};
pub use search::{find_best_move, find_random_move, DEFAULT_SEARCH_DEPTH};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, Piece, Square};
