//! Move representation.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A single chess move.
///
/// `piece` and `captured` are bookkeeping the apply/undo engine needs to
/// reverse the move exactly; they are deliberately excluded from equality.
/// Two moves compare equal iff source, destination, and the special-move
/// flags coincide, so a move constructed elsewhere matches the generator's
/// instance for the same squares.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Source square
    pub from: Square,
    /// Destination square
    pub to: Square,
    /// The piece being moved
    pub piece: Piece,
    /// The piece captured on the destination (or the bypassed pawn for en passant)
    pub captured: Option<Piece>,
    /// Pawn reaches the far rank; always promotes to a queen
    pub is_promotion: bool,
    /// En passant capture onto the skipped square
    pub is_en_passant: bool,
    /// Castling (king moves two files; the rook relocation is implied)
    pub is_castle: bool,
}

impl Move {
    /// Create a move with no special flags.
    #[must_use]
    pub(crate) const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            is_promotion: false,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Create a pawn promotion move (queen promotion is implied).
    #[must_use]
    pub(crate) const fn promotion(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            captured,
            is_promotion: true,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Create an en passant capture. The captured pawn sits beside the
    /// source square, not on the destination.
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            captured: Some(Piece::Pawn),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Create a castling move (king from e-file to g- or c-file).
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::King,
            captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// The comparable identity of the move.
    #[inline]
    fn key(self) -> (Square, Square, bool, bool, bool) {
        (
            self.from,
            self.to,
            self.is_promotion,
            self.is_en_passant,
            self.is_castle,
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
