//! Fluent builder for constructing board snapshots.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Alliance, BoardBuilder, Coord, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse::<Coord>().unwrap(), Alliance::White, PieceKind::King)
//!     .piece("e8".parse::<Coord>().unwrap(), Alliance::Black, PieceKind::King)
//!     .piece("a2".parse::<Coord>().unwrap(), Alliance::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.occupied_count(), 3);
//! ```

use super::types::{NUM_SQUARES, ROW_LEN};
use super::{Alliance, Board, Coord, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` snapshots.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    placement: [Option<Piece>; NUM_SQUARES],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placement: [None; NUM_SQUARES],
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for alliance in Alliance::BOTH {
            for (column, &kind) in back_row.iter().enumerate() {
                builder.put(column, alliance.back_row(), alliance, kind);
                builder.put(column, alliance.pawn_start_row(), alliance, PieceKind::Pawn);
            }
        }
        builder
    }

    fn put(&mut self, column: usize, row: usize, alliance: Alliance, kind: PieceKind) {
        let coord = Coord::from_index(row * ROW_LEN + column);
        self.placement[coord.index()] = Some(Piece::new(kind, alliance, coord));
    }

    /// Place a piece of `kind` on `coord`, replacing any existing occupant.
    #[must_use]
    pub fn piece(self, coord: Coord, alliance: Alliance, kind: PieceKind) -> Self {
        self.place(Piece::new(kind, alliance, coord))
    }

    /// Place an already-positioned piece, replacing any existing occupant.
    #[must_use]
    pub fn place(mut self, piece: Piece) -> Self {
        #[cfg(feature = "logging")]
        log::trace!("placing {piece}");
        self.placement[piece.position().index()] = Some(piece);
        self
    }

    /// Remove a piece from a coordinate.
    #[must_use]
    pub fn clear(mut self, coord: Coord) -> Self {
        self.placement[coord.index()] = None;
        self
    }

    /// Build the board.
    ///
    /// Occupied coordinates get fresh squares; every other coordinate reuses
    /// the cached empty square.
    #[must_use]
    pub fn build(self) -> Board {
        let squares = Coord::all()
            .map(|coord| Square::create(coord, self.placement[coord.index()]))
            .collect();
        let board = Board::from_squares(squares);

        #[cfg(feature = "logging")]
        log::debug!("built board with {} pieces", board.occupied_count());

        board
    }
}
