pub mod board;

pub use board::{Board, CastlingRights, Color, Move, Piece, Square};
pub use board::{find_best_move, find_random_move, DEFAULT_SEARCH_DEPTH};
pub use board::{FenError, SquareError};
pub use board::{CHECKMATE_SCORE, STALEMATE_SCORE};
