//! Board squares and the shared empty-square cache.
//!
//! A square is an immutable value: either empty or holding exactly one
//! piece. Changing what stands on a coordinate means replacing the square,
//! never editing it. Empty squares vastly outnumber occupied ones in every
//! snapshot, so the 64 empty variants are built once and borrowed from a
//! process-wide table.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;

use super::types::NUM_SQUARES;
use super::{Coord, Piece};

/// Canonical empty squares, indexed by coordinate. Read-only once built.
static EMPTY_SQUARES: Lazy<[Square; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| Square::Empty {
        coordinate: Coord::from_index(idx),
    })
});

/// One of the 64 board positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Empty { coordinate: Coord },
    Occupied { coordinate: Coord, piece: Piece },
}

impl Square {
    /// Build the square for `coordinate`.
    ///
    /// With no piece this borrows the cached empty square, so repeated calls
    /// return the same instance and never allocate. With a piece it builds a
    /// fresh occupied square.
    ///
    /// # Panics
    /// Panics if `piece` is positioned somewhere other than `coordinate`.
    #[must_use]
    pub fn create(coordinate: Coord, piece: Option<Piece>) -> Cow<'static, Square> {
        match piece {
            Some(piece) => Cow::Owned(Square::occupied(coordinate, piece)),
            None => Cow::Borrowed(Square::empty(coordinate)),
        }
    }

    /// The cached empty square for `coordinate`.
    #[inline]
    #[must_use]
    pub fn empty(coordinate: Coord) -> &'static Square {
        &EMPTY_SQUARES[coordinate.index()]
    }

    fn occupied(coordinate: Coord, piece: Piece) -> Square {
        if piece.position() != coordinate {
            #[cfg(feature = "logging")]
            log::error!("{piece} placed on square {coordinate}");
            panic!(
                "piece at {} cannot occupy square {}",
                piece.position(),
                coordinate
            );
        }
        Square::Occupied { coordinate, piece }
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coord {
        match self {
            Square::Empty { coordinate } | Square::Occupied { coordinate, .. } => *coordinate,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Square::Occupied { .. })
    }

    /// The occupant, or `None` for an empty square.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Square::Empty { .. } => None,
            Square::Occupied { piece, .. } => Some(piece),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty { .. } => write!(f, "-"),
            Square::Occupied { piece, .. } => write!(f, "{}", piece.to_fen_char()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Alliance, PieceKind};

    #[test]
    fn test_empty_squares_are_shared() {
        for coord in Coord::all() {
            let first = Square::create(coord, None);
            let second = Square::create(coord, None);
            assert!(matches!(first, Cow::Borrowed(_)));
            assert!(std::ptr::eq(first.as_ref(), second.as_ref()));
            assert!(std::ptr::eq(first.as_ref(), Square::empty(coord)));
            assert_eq!(first.coordinate(), coord);
        }
    }

    #[test]
    fn test_occupied_square_is_fresh() {
        let coord = Coord::from_index(27);
        let knight = Piece::new(PieceKind::Knight, Alliance::White, coord);
        let square = Square::create(coord, Some(knight));

        assert!(matches!(square, Cow::Owned(_)));
        assert!(square.is_occupied());
        assert_eq!(square.piece(), Some(&knight));
        assert_eq!(square.to_string(), "N");
    }

    #[test]
    fn test_empty_square_has_no_piece() {
        let square = Square::empty(Coord::from_index(0));
        assert!(!square.is_occupied());
        assert!(square.piece().is_none());
        assert_eq!(square.to_string(), "-");
    }

    #[test]
    #[should_panic(expected = "cannot occupy")]
    fn test_mismatched_occupant_panics() {
        let rook = Piece::new(PieceKind::Rook, Alliance::Black, Coord::from_index(0));
        let _ = Square::create(Coord::from_index(1), Some(rook));
    }
}
