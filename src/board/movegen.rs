//! Pseudo-legal move generation and the legality filter.
//!
//! Pseudo-moves are geometrically valid per piece-movement rules and ignore
//! king safety. [`Board::legal_moves`] filters them by probing each
//! candidate with make/undo and rejecting those that leave the mover's own
//! king attacked. Every king-safety probe regenerates the opponent's
//! pseudo-moves, so the filter is O(branching^2) per node; that is the
//! dominant search cost and the main optimization opportunity (attack maps,
//! incremental check detection) left unexplored at this scope.

use super::{Board, Color, Move, Piece, Square};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Generate every geometrically valid move for `color`, ignoring king
    /// safety. Castling is not produced here; it is appended by
    /// [`Board::legal_moves`] because its preconditions need attack checks.
    pub(crate) fn pseudo_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let Some((piece_color, piece)) = self.piece_at(from) else {
                    continue;
                };
                if piece_color != color {
                    continue;
                }
                match piece {
                    Piece::Pawn => self.pawn_moves(from, color, &mut moves),
                    Piece::Knight => {
                        self.offset_moves(from, color, Piece::Knight, &KNIGHT_OFFSETS, &mut moves);
                    }
                    Piece::Bishop => {
                        self.sliding_moves(from, color, Piece::Bishop, &BISHOP_DIRECTIONS, &mut moves);
                    }
                    Piece::Rook => {
                        self.sliding_moves(from, color, Piece::Rook, &ROOK_DIRECTIONS, &mut moves);
                    }
                    Piece::Queen => {
                        self.sliding_moves(from, color, Piece::Queen, &QUEEN_DIRECTIONS, &mut moves);
                    }
                    Piece::King => {
                        self.offset_moves(from, color, Piece::King, &KING_OFFSETS, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                if forward.0 == promotion_rank {
                    moves.push(Move::promotion(from, forward, None));
                } else {
                    moves.push(Move::new(from, forward, Piece::Pawn, None));
                    if from.0 == color.pawn_start_rank() {
                        // Both intervening squares must be empty.
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty(double) {
                                moves.push(Move::new(from, double, Piece::Pawn, None));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures; `offset` bounds-checks inclusively, so a- and
        // h-file captures are generated.
        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some((target_color, target_piece)) = self.piece_at(target) {
                if target_color != color {
                    if target.0 == promotion_rank {
                        moves.push(Move::promotion(from, target, Some(target_piece)));
                    } else {
                        moves.push(Move::new(from, target, Piece::Pawn, Some(target_piece)));
                    }
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(Move::en_passant(from, target));
            }
        }
    }

    /// Knight and king moves: fixed offset tables, any destination not
    /// occupied by a friendly piece.
    fn offset_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                occupant => moves.push(Move::new(from, to, piece, occupant.map(|(_, p)| p))),
            }
        }
    }

    /// Sliding pieces walk each direction square by square: through empties,
    /// including-and-stopping on an enemy piece, stopping before a friendly
    /// piece or the board edge.
    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::new(from, to, piece, None));
                        current = to;
                    }
                    Some((target_color, target_piece)) => {
                        if target_color != color {
                            moves.push(Move::new(from, to, piece, Some(target_piece)));
                        }
                        break;
                    }
                }
            }
        }
    }

    /// True if any pseudo-move of `by` lands on `square`.
    ///
    /// Attack is defined over the attacker's pseudo-move destinations, so a
    /// pawn push counts as covering the square it advances to.
    #[must_use]
    pub fn square_attacked(&self, square: Square, by: Color) -> bool {
        self.pseudo_moves(by).iter().any(|mv| mv.to == square)
    }

    /// True if `color`'s king is attacked by the opponent.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked(self.kings[color.index()], color.opponent())
    }

    /// Append castle candidates for `color`. Preconditions: the matching
    /// right is held, the king stands on its home square and is not in
    /// check, all squares between king and rook are empty, and the king
    /// neither crosses nor lands on an attacked square.
    fn castle_moves(&self, color: Color, moves: &mut Vec<Move>) {
        let kingside = self.castling_rights.has(color, true);
        let queenside = self.castling_rights.has(color, false);
        if !kingside && !queenside {
            return;
        }

        let back = color.back_rank();
        let king_home = Square(back, 4);
        if self.kings[color.index()] != king_home || self.in_check(color) {
            return;
        }

        let opponent = color.opponent();

        if kingside
            && self.is_empty(Square(back, 5))
            && self.is_empty(Square(back, 6))
            && self.piece_at(Square(back, 7)) == Some((color, Piece::Rook))
            && !self.square_attacked(Square(back, 5), opponent)
            && !self.square_attacked(Square(back, 6), opponent)
        {
            moves.push(Move::castle(king_home, Square(back, 6)));
        }

        if queenside
            && self.is_empty(Square(back, 1))
            && self.is_empty(Square(back, 2))
            && self.is_empty(Square(back, 3))
            && self.piece_at(Square(back, 0)) == Some((color, Piece::Rook))
            && !self.square_attacked(Square(back, 3), opponent)
            && !self.square_attacked(Square(back, 2), opponent)
        {
            moves.push(Move::castle(king_home, Square(back, 2)));
        }
    }

    /// Generate all legal moves for the side to move.
    ///
    /// Each candidate is probed with make/undo and discarded if it leaves
    /// the mover's own king attacked. When no move survives, the terminal
    /// flags are set: checkmate if the mover is in check, stalemate
    /// otherwise.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.current_color();

        let mut candidates = self.pseudo_moves(color);
        self.castle_moves(color, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.make_move(mv);
            if !self.in_check(color) {
                legal.push(mv);
            }
            self.undo_move();
        }

        if legal.is_empty() {
            self.checkmate = self.in_check(color);
            self.stalemate = !self.checkmate;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        legal
    }

    /// True if the side to move is checkmated
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.current_color();
        self.in_check(color) && self.legal_moves().is_empty()
    }

    /// True if the side to move is stalemated
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.current_color();
        !self.in_check(color) && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal-move tree to `depth`. Used by the
    /// correctness tests and benchmarks.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
