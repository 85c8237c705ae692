use super::{CastlingRights, Color, Move, Piece, Square};

/// Snapshot of the irreversible state a move destroys, kept on the history
/// stack so [`Board::undo_move`] can restore the position exactly.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Undo {
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

/// Full game state: an 8x8 mailbox plus the bookkeeping needed for legal
/// move generation and exact undo.
///
/// Exactly one king per side must be present at all times during play.
#[derive(Clone, Debug)]
pub struct Board {
    /// squares[rank][file]; rank 0 = White's back rank
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) white_to_move: bool,
    /// Cached king squares, indexed by `Color::index()`
    pub(crate) kings: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    /// Square a pawn skipped on its double push, valid for one ply
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    /// Applied moves with their undo snapshots, newest last
    pub(crate) history: Vec<(Move, Undo)>,
}

impl Board {
    /// Create a board set up in the initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.kings = [Square(0, 4), Square(7, 4)];
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            white_to_move: true,
            kings: [Square(0, 4), Square(7, 4)],
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            checkmate: false,
            stalemate: false,
            history: Vec::new(),
        }
    }

    /// Get the piece (color and type) on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// True when it is White's turn to move
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// The side to move
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub(crate) fn current_color(&self) -> Color {
        self.side_to_move()
    }

    /// Current castling rights
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en passant target square, if a pawn just double-pushed
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// True if the side to move has been checkmated.
    ///
    /// Set by the most recent [`Board::legal_moves`] call; cleared whenever
    /// the position changes.
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// True if the side to move is stalemated (no moves, not in check).
    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    /// Cached square of a side's king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// The most recently applied move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|(mv, _)| *mv)
    }

    /// Number of applied moves on the history stack
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
