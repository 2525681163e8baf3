//! Piece kinds, their candidate-offset tables, and placed pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::alliance::Alliance;
use super::coord::{Coord, ROW_LEN};

/// A candidate step in coordinate space.
///
/// `delta` is the linear change of the coordinate; `column_shift` is how many
/// columns that step moves left (negative) or right (positive). A step is an
/// edge-wrap when the origin column plus `column_shift` falls off the board,
/// even if `origin + delta` is still in `0..64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Offset {
    pub(crate) delta: i8,
    pub(crate) column_shift: i8,
}

impl Offset {
    pub(crate) const fn new(delta: i8, column_shift: i8) -> Self {
        Offset {
            delta,
            column_shift,
        }
    }

    /// Apply this step to `from`, rejecting both off-board and edge-wrapping targets.
    #[inline]
    pub(crate) fn apply(self, from: Coord) -> Option<Coord> {
        let column = from.column() as i8 + self.column_shift;
        if !(0..ROW_LEN as i8).contains(&column) {
            return None;
        }
        from.offset(self.delta)
    }
}

pub(crate) const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-17, -1),
    Offset::new(-15, 1),
    Offset::new(-10, -2),
    Offset::new(-6, 2),
    Offset::new(6, -2),
    Offset::new(10, 2),
    Offset::new(15, -1),
    Offset::new(17, 1),
];

pub(crate) const BISHOP_OFFSETS: [Offset; 4] = [
    Offset::new(-9, -1),
    Offset::new(-7, 1),
    Offset::new(7, -1),
    Offset::new(9, 1),
];

pub(crate) const ROOK_OFFSETS: [Offset; 4] = [
    Offset::new(-8, 0),
    Offset::new(-1, -1),
    Offset::new(1, 1),
    Offset::new(8, 0),
];

/// Queen and king share the eight one-step directions.
pub(crate) const QUEEN_OFFSETS: [Offset; 8] = [
    Offset::new(-9, -1),
    Offset::new(-8, 0),
    Offset::new(-7, 1),
    Offset::new(-1, -1),
    Offset::new(1, 1),
    Offset::new(7, -1),
    Offset::new(8, 0),
    Offset::new(9, 1),
];

pub(crate) const KING_OFFSETS: [Offset; 8] = QUEEN_OFFSETS;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (p, n, b, r, q, k in either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if this piece repeats its steps until blocked (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Step table for the non-pawn kinds. Pawn steps depend on the alliance.
    #[inline]
    pub(crate) fn offsets(self) -> &'static [Offset] {
        match self {
            PieceKind::Knight => &KNIGHT_OFFSETS,
            PieceKind::Bishop => &BISHOP_OFFSETS,
            PieceKind::Rook => &ROOK_OFFSETS,
            PieceKind::Queen => &QUEEN_OFFSETS,
            PieceKind::King => &KING_OFFSETS,
            PieceKind::Pawn => &[],
        }
    }
}

/// A piece placed on a board coordinate.
///
/// Pieces are immutable values: moving one yields a new `Piece` at the
/// destination via [`Piece::moved_to`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Coord,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Coord) -> Self {
        Piece {
            kind,
            alliance,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// The same piece standing on `destination`.
    #[inline]
    #[must_use]
    pub const fn moved_to(&self, destination: Coord) -> Self {
        Piece::new(self.kind, self.alliance, destination)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn to_fen_char(&self) -> char {
        let c = self.kind.to_char();
        if self.alliance.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.to_fen_char(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_wrap_from_a_file() {
        let a5 = Coord::from_index(24);
        let targets: Vec<usize> = KNIGHT_OFFSETS
            .iter()
            .filter_map(|o| o.apply(a5))
            .map(Coord::index)
            .collect();
        // -17, -10, 6 and 15 would alias onto the h and g files
        assert_eq!(targets, vec![9, 18, 34, 41]);
    }

    #[test]
    fn test_knight_wrap_from_b_and_g_files() {
        let b5 = Coord::from_index(25);
        let b_targets: Vec<i8> = KNIGHT_OFFSETS
            .iter()
            .filter(|o| o.apply(b5).is_some())
            .map(|o| o.delta)
            .collect();
        assert_eq!(b_targets, vec![-17, -15, -6, 10, 15, 17]);

        let g5 = Coord::from_index(30);
        let g_targets: Vec<i8> = KNIGHT_OFFSETS
            .iter()
            .filter(|o| o.apply(g5).is_some())
            .map(|o| o.delta)
            .collect();
        assert_eq!(g_targets, vec![-17, -15, -10, 6, 15, 17]);
    }

    #[test]
    fn test_one_step_wrap_on_h_file() {
        let h5 = Coord::from_index(31);
        let deltas: Vec<i8> = QUEEN_OFFSETS
            .iter()
            .filter(|o| o.apply(h5).is_some())
            .map(|o| o.delta)
            .collect();
        assert_eq!(deltas, vec![-9, -8, -1, 7, 8]);
    }

    #[test]
    fn test_moved_to_keeps_identity() {
        let knight = Piece::new(PieceKind::Knight, Alliance::Black, Coord::from_index(1));
        let moved = knight.moved_to(Coord::from_index(18));
        assert_eq!(moved.kind(), PieceKind::Knight);
        assert_eq!(moved.alliance(), Alliance::Black);
        assert_eq!(moved.position().index(), 18);
        assert_eq!(knight.position().index(), 1);
    }

    #[test]
    fn test_fen_char_case() {
        let white = Piece::new(PieceKind::Queen, Alliance::White, Coord::from_index(59));
        let black = Piece::new(PieceKind::Queen, Alliance::Black, Coord::from_index(3));
        assert_eq!(white.to_fen_char(), 'Q');
        assert_eq!(black.to_fen_char(), 'q');
        assert_eq!(white.to_string(), "Q@d1");
    }

    #[test]
    fn test_from_char_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }
}
