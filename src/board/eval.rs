//! Material evaluation.

use super::Board;

/// Score representing a delivered or forced mate. Larger in magnitude than
/// any attainable material total (full material is well under 100).
pub const CHECKMATE_SCORE: i32 = 1000;

/// Score of a stalemated position
pub const STALEMATE_SCORE: i32 = 0;

impl Board {
    /// Zero-sum material score of the position, from White's perspective.
    ///
    /// Terminal positions dominate: a checkmated side to move scores
    /// `-CHECKMATE_SCORE` for White and `+CHECKMATE_SCORE` for Black,
    /// stalemate scores zero. Otherwise the piece values (pawn 1, knight 3,
    /// bishop 3, rook 5, queen 10, king 0) are summed, White positive and
    /// Black negative. Swapping all piece colors and the side to move
    /// negates the score.
    ///
    /// The terminal flags consulted here are the ones set by the most
    /// recent [`Board::legal_moves`] call.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.checkmate {
            return if self.white_to_move {
                -CHECKMATE_SCORE
            } else {
                CHECKMATE_SCORE
            };
        }
        if self.stalemate {
            return STALEMATE_SCORE;
        }

        let mut score = 0;
        for rank in &self.squares {
            for square in rank {
                if let Some((color, piece)) = square {
                    score += color.sign() * piece.value();
                }
            }
        }
        score
    }
}
