//! Core chess types.
//!
//! This module contains the value types move generation is built from:
//! - `Alliance` - the two sides
//! - `Coord` - a checked board coordinate (0-63)
//! - `PieceKind` and `Piece` - piece types, their step tables, placed pieces
//! - `Move` and `MoveList` - generated moves

mod alliance;
mod coord;
mod moves;
mod piece;

// Re-export all public types
pub use alliance::Alliance;
pub use coord::Coord;
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Piece, PieceKind};

// Re-export internal utilities
pub(crate) use coord::{NUM_SQUARES, ROW_LEN};
pub(crate) use piece::{Offset, KING_OFFSETS, KNIGHT_OFFSETS};
