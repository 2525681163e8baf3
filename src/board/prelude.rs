//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//! ```

pub use super::{
    Alliance, Board, BoardBuilder, Coord, CoordError, FenError, Move, MoveKind, MoveList, Piece,
    PieceKind, Square,
};
