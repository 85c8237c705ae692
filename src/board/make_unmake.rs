//! The apply/undo engine.
//!
//! `make_move` and `undo_move` are exact inverses: undoing the last applied
//! move restores every observable field (squares, side to move, castling
//! rights, en passant target, king cache) bit for bit.

use super::state::Undo;
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Apply a move to the board.
    ///
    /// The move must come from [`Board::legal_moves`] for the current
    /// position; the engine performs no validation beyond that contract.
    pub fn make_move(&mut self, mv: Move) {
        let color = self.current_color();
        let undo = Undo {
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        };

        self.remove_piece(mv.from);

        if mv.is_en_passant {
            // The captured pawn sits beside the source square, not on the
            // destination (which is empty).
            self.remove_piece(Square(mv.from.0, mv.to.1));
        }

        let placed = if mv.is_promotion {
            Piece::Queen
        } else {
            mv.piece
        };
        self.set_piece(mv.to, color, placed);

        if mv.is_castle {
            let rank = mv.to.0;
            let (rook_from, rook_to) = if mv.to.1 == 6 { (7, 5) } else { (0, 3) };
            self.remove_piece(Square(rank, rook_from));
            self.set_piece(Square(rank, rook_to), color, Piece::Rook);
        }

        if mv.piece == Piece::King {
            self.kings[color.index()] = mv.to;
        }

        // The en passant window lasts exactly one ply.
        self.en_passant_target = if mv.piece == Piece::Pawn
            && (mv.from.0 as isize - mv.to.0 as isize).abs() == 2
        {
            Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1))
        } else {
            None
        };

        self.update_castling_rights(&mv, color);

        self.history.push((mv, undo));
        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Revoke castling rights lost by this move: the king leaving its home
    /// square, a rook leaving its home square, or a rook being captured on
    /// its home square.
    fn update_castling_rights(&mut self, mv: &Move, color: Color) {
        match mv.piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => {
                let back = color.back_rank();
                if mv.from == Square(back, 0) {
                    self.castling_rights.remove(color, false);
                } else if mv.from == Square(back, 7) {
                    self.castling_rights.remove(color, true);
                }
            }
            _ => {}
        }

        if mv.captured == Some(Piece::Rook) && !mv.is_en_passant {
            let opponent = color.opponent();
            let back = opponent.back_rank();
            if mv.to == Square(back, 0) {
                self.castling_rights.remove(opponent, false);
            } else if mv.to == Square(back, 7) {
                self.castling_rights.remove(opponent, true);
            }
        }
    }

    /// Undo the most recently applied move.
    ///
    /// A no-op returning `None` when the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;

        self.white_to_move = !self.white_to_move;
        let color = self.current_color();

        // Promoted pawns go back as pawns.
        self.set_piece(mv.from, color, mv.piece);

        if mv.is_en_passant {
            self.remove_piece(mv.to);
            self.set_piece(Square(mv.from.0, mv.to.1), color.opponent(), Piece::Pawn);
        } else if let Some(captured) = mv.captured {
            self.set_piece(mv.to, color.opponent(), captured);
        } else {
            self.remove_piece(mv.to);
        }

        if mv.is_castle {
            let rank = mv.to.0;
            let (rook_home, rook_moved) = if mv.to.1 == 6 { (7, 5) } else { (0, 3) };
            self.remove_piece(Square(rank, rook_moved));
            self.set_piece(Square(rank, rook_home), color, Piece::Rook);
        }

        if mv.piece == Piece::King {
            self.kings[color.index()] = mv.from;
        }

        self.castling_rights = undo.castling_rights;
        self.en_passant_target = undo.en_passant_target;

        // Terminal flags describe a position that no longer exists.
        self.checkmate = false;
        self.stalemate = false;

        Some(mv)
    }
}
