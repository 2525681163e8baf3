//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::Piece;
use crate::board::state::Board;

/// Most destinations a single piece can reach (a centralised queen).
pub(crate) const MAX_PIECE_MOVES: usize = 27;

/// Shape of a move.
///
/// Castling, en passant and promotion are not generated by this crate yet;
/// new kinds slot in here when they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Move to an empty square
    Normal,
    /// Move onto a square held by the opposing alliance
    Capture,
    /// Two-square pawn advance from its starting row
    PawnJump,
}

/// A candidate transition of one piece, evaluated against a board snapshot.
///
/// A `Move` never mutates anything. Applying it to produce a successor
/// position belongs to the game-state layer above this crate.
#[derive(Clone, Copy)]
pub struct Move<'b> {
    board: &'b Board,
    moved_piece: Piece,
    destination: Coord,
    kind: MoveKind,
}

impl<'b> Move<'b> {
    /// Create a move to an empty square
    #[inline]
    #[must_use]
    pub fn normal(board: &'b Board, moved_piece: Piece, destination: Coord) -> Self {
        Move::with_kind(board, moved_piece, destination, MoveKind::Normal)
    }

    /// Create a move capturing the occupant of `destination`
    #[inline]
    #[must_use]
    pub fn capture(board: &'b Board, moved_piece: Piece, destination: Coord) -> Self {
        Move::with_kind(board, moved_piece, destination, MoveKind::Capture)
    }

    /// Create a two-square pawn advance
    #[inline]
    #[must_use]
    pub fn pawn_jump(board: &'b Board, moved_piece: Piece, destination: Coord) -> Self {
        Move::with_kind(board, moved_piece, destination, MoveKind::PawnJump)
    }

    #[inline]
    const fn with_kind(
        board: &'b Board,
        moved_piece: Piece,
        destination: Coord,
        kind: MoveKind,
    ) -> Self {
        Move {
            board,
            moved_piece,
            destination,
            kind,
        }
    }

    /// The board snapshot this move was generated against
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &'b Board {
        self.board
    }

    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    /// Source coordinate, i.e. the moved piece's position
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Coord {
        self.moved_piece.position()
    }

    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Coord {
        self.destination
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }

    /// The piece standing on the destination, for capturing moves
    #[must_use]
    pub fn attacked_piece(&self) -> Option<Piece> {
        if self.is_capture() {
            self.board.get_square(self.destination).piece().copied()
        } else {
            None
        }
    }
}

impl PartialEq for Move<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.moved_piece == other.moved_piece
            && self.destination == other.destination
            && self.kind == other.kind
    }
}

impl Eq for Move<'_> {}

impl Hash for Move<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.moved_piece.hash(state);
        self.destination.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Debug for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.moved_piece.to_fen_char())?;
        write!(f, "{}", self.origin())?;
        if self.is_capture() {
            write!(f, "x")?;
        }
        write!(f, "{}", self.destination)?;
        if self.kind == MoveKind::PawnJump {
            write!(f, " jump")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.destination)
    }
}

/// Ordered list of moves produced by one generation call.
#[derive(Clone, Debug, Default)]
pub struct MoveList<'b> {
    moves: Vec<Move<'b>>,
}

impl<'b> MoveList<'b> {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_PIECE_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move<'b>) {
        self.moves.push(mv);
    }

    pub(crate) fn extend(&mut self, other: MoveList<'b>) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move<'b>] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move<'b>> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move<'b>> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move<'b>> {
        self.get(0)
    }

    /// Destination coordinates in generation order
    pub fn destinations<'a>(&'a self) -> impl Iterator<Item = Coord> + 'a {
        let moves: &'a [Move<'a>] = &self.moves;
        moves.iter().map(Move::destination)
    }

    /// Only the capturing moves, in generation order
    pub fn captures(&self) -> impl Iterator<Item = &Move<'b>> + '_ {
        self.moves.iter().filter(|m| m.is_capture())
    }
}

impl<'a, 'b> IntoIterator for &'a MoveList<'b> {
    type Item = &'a Move<'b>;
    type IntoIter = std::slice::Iter<'a, Move<'b>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl<'b> IntoIterator for MoveList<'b> {
    type Item = Move<'b>;
    type IntoIter = std::vec::IntoIter<Move<'b>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'b> Index<usize> for MoveList<'b> {
    type Output = Move<'b>;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Alliance, BoardBuilder, PieceKind};
    use std::collections::HashSet;

    fn c(idx: usize) -> Coord {
        Coord::from_index(idx)
    }

    #[test]
    fn test_equality_ignores_board() {
        let rook = Piece::new(PieceKind::Rook, Alliance::White, c(63));
        let a = BoardBuilder::new().place(rook).build();
        let b = BoardBuilder::new()
            .place(rook)
            .place(Piece::new(PieceKind::Pawn, Alliance::Black, c(8)))
            .build();

        assert_eq!(Move::normal(&a, rook, c(55)), Move::normal(&b, rook, c(55)));
        assert_ne!(Move::normal(&a, rook, c(55)), Move::capture(&a, rook, c(55)));
        assert_ne!(Move::normal(&a, rook, c(55)), Move::normal(&a, rook, c(47)));

        let mut seen = HashSet::new();
        seen.insert(Move::normal(&a, rook, c(55)));
        seen.insert(Move::normal(&b, rook, c(55)));
        assert_eq!(seen.len(), 1);
        seen.insert(Move::capture(&b, rook, c(55)));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_attacked_piece_reads_evaluated_board() {
        let rook = Piece::new(PieceKind::Rook, Alliance::White, c(63));
        let pawn = Piece::new(PieceKind::Pawn, Alliance::Black, c(55));
        let board = BoardBuilder::new().place(rook).place(pawn).build();

        let capture = Move::capture(&board, rook, c(55));
        assert!(capture.is_capture());
        assert_eq!(capture.attacked_piece(), Some(pawn));
        assert_eq!(Move::normal(&board, rook, c(62)).attacked_piece(), None);
    }

    #[test]
    fn test_display_and_debug() {
        let board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Alliance::White, c(52));
        let jump = Move::pawn_jump(&board, pawn, c(36));
        assert_eq!(jump.origin().index(), 52);
        assert_eq!(jump.to_string(), "e2e4");
        assert_eq!(format!("{jump:?}"), "Move(Pe2e4 jump)");
    }

    #[test]
    fn test_move_list_order_and_index() {
        let board = Board::empty();
        let king = Piece::new(PieceKind::King, Alliance::Black, c(4));
        let mut list = MoveList::new();
        list.push(Move::normal(&board, king, c(3)));
        list.push(Move::normal(&board, king, c(5)));

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].destination(), c(5));
        assert_eq!(list.first().map(|m| m.destination()), Some(c(3)));
        assert_eq!(list.get(2), None);
        assert_eq!(list.destinations().collect::<Vec<_>>(), vec![c(3), c(5)]);
        assert_eq!(list.captures().count(), 0);
    }
}
