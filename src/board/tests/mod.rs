//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `knights.rs` - Knight jumps, corners, and edge-wrap exclusions
//! - `sliders.rs` - Bishop, rook and queen rays and blocking
//! - `kings.rs` - King steps
//! - `pawns.rs` - Pushes, jumps and diagonal captures
//! - `proptest.rs` - Property-based tests over random boards

mod knights;

use crate::board::{Alliance, Board, Coord, MoveList, Piece, PieceKind};

pub(super) fn c(idx: usize) -> Coord {
    Coord::from_index(idx)
}

pub(super) fn destinations(moves: &MoveList<'_>) -> Vec<usize> {
    moves.destinations().map(Coord::index).collect()
}

/// Place `piece` alone on an otherwise empty board and generate its moves.
pub(super) fn lone_destinations(kind: PieceKind, alliance: Alliance, at: usize) -> Vec<usize> {
    let piece = Piece::new(kind, alliance, c(at));
    let board = Board::empty().with_piece(piece);
    destinations(&piece.calculate_legal_moves(&board))
}
