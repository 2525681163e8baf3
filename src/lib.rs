pub mod board;

pub use board::{Alliance, Board, Coord, Move, MoveKind, MoveList, Piece, PieceKind, Square};
