//! Board squares and per-piece move generation.
//!
//! A [`Board`] is an immutable snapshot of 64 [`Square`]s. Each [`Piece`]
//! computes its primitive moves against a snapshot with
//! [`Piece::calculate_legal_moves`]; nothing is mutated, so snapshots can be
//! shared freely between threads.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Alliance, Board, Coord, Piece, PieceKind};
//!
//! let board = Board::empty();
//! let knight = Piece::new(PieceKind::Knight, Alliance::White, Coord::from_index(0));
//! let moves = knight.calculate_legal_moves(&board);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod square;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{CoordError, FenError};
pub use square::Square;
pub use state::Board;
pub use types::{Alliance, Coord, Move, MoveKind, MoveList, Piece, PieceKind};
