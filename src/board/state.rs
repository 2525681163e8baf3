use std::borrow::Cow;
use std::fmt;

use super::types::{NUM_SQUARES, ROW_LEN};
use super::{Alliance, BoardBuilder, Coord, Piece, Square};

/// An immutable snapshot of 64 squares.
///
/// Squares are indexed by coordinate. Empty entries borrow the shared
/// empty-square cache, so building or cloning a snapshot only copies the
/// occupied squares. Nothing mutates a board once built; a new position is
/// a new `Board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Cow<'static, Square>; NUM_SQUARES],
}

impl Board {
    /// A board with every square empty.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|idx| Square::create(Coord::from_index(idx), None)),
        }
    }

    /// The standard starting setup.
    #[must_use]
    pub fn standard() -> Self {
        BoardBuilder::starting_position().build()
    }

    /// Assemble a board from squares listed in coordinate order.
    ///
    /// # Panics
    /// Panics unless there are exactly 64 squares, the square at position
    /// `i` has coordinate `i`, and every occupant's position matches its
    /// square. A board that does not present every coordinate
    /// would make move generation silently wrong.
    #[must_use]
    pub fn from_squares(squares: Vec<Cow<'static, Square>>) -> Self {
        if squares.len() != NUM_SQUARES {
            #[cfg(feature = "logging")]
            log::error!("board assembled from {} squares", squares.len());
            panic!(
                "board needs exactly {} squares, got {}",
                NUM_SQUARES,
                squares.len()
            );
        }
        for (idx, square) in squares.iter().enumerate() {
            assert_eq!(
                square.coordinate().index(),
                idx,
                "square for {} listed at index {}",
                square.coordinate(),
                idx
            );
            if let Some(piece) = square.piece() {
                if piece.position() != square.coordinate() {
                    #[cfg(feature = "logging")]
                    log::error!(
                        "piece at {} found on square {}",
                        piece.position(),
                        square.coordinate()
                    );
                    panic!(
                        "piece at {} cannot occupy square {}",
                        piece.position(),
                        square.coordinate()
                    );
                }
            }
        }

        let squares: [Cow<'static, Square>; NUM_SQUARES] = match squares.try_into() {
            Ok(squares) => squares,
            Err(_) => unreachable!("length checked above"),
        };
        Board { squares }
    }

    /// The square at `coordinate`.
    #[inline]
    #[must_use]
    pub fn get_square(&self, coordinate: Coord) -> &Square {
        &self.squares[coordinate.index()]
    }

    /// The piece at `coordinate`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coordinate: Coord) -> Option<&Piece> {
        self.get_square(coordinate).piece()
    }

    /// All squares in coordinate order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().map(|sq| &**sq)
    }

    /// Active pieces of one alliance in coordinate order.
    pub fn pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> {
        self.squares()
            .filter_map(Square::piece)
            .filter(move |piece| piece.alliance() == alliance)
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.squares().filter(|sq| sq.is_occupied()).count()
    }

    /// A new board with `piece` placed on its position, replacing whatever was there.
    #[must_use]
    pub fn with_piece(&self, piece: Piece) -> Self {
        let mut next = self.clone();
        next.squares[piece.position().index()] = Square::create(piece.position(), Some(piece));
        next
    }

    /// A new board with `coordinate` emptied.
    #[must_use]
    pub fn without_piece(&self, coordinate: Coord) -> Self {
        let mut next = self.clone();
        next.squares[coordinate.index()] = Square::create(coordinate, None);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(ROW_LEN) {
            let line: Vec<String> = row.iter().map(|sq| sq.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
