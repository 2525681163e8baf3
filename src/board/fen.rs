use super::error::FenError;
use super::types::ROW_LEN;
use super::{Alliance, Board, BoardBuilder, Coord, PieceKind};

impl Board {
    /// Parse a board from the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move,
    /// castling and the clocks belong to game state and are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != ROW_LEN {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut builder = BoardBuilder::new();
        // FEN lists rank 8 first, which is row 0 here
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut column = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=ROW_LEN as u32).contains(&skip) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    column += skip as usize;
                    continue;
                }

                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let alliance = if c.is_ascii_uppercase() {
                    Alliance::White
                } else {
                    Alliance::Black
                };
                let coord = Coord::from_column_row(column, row).ok_or(FenError::WrongFileCount {
                    rank: ROW_LEN - row,
                    files: column + 1,
                })?;
                builder = builder.piece(coord, alliance, kind);
                column += 1;
            }
            if column != ROW_LEN {
                return Err(FenError::WrongFileCount {
                    rank: ROW_LEN - row,
                    files: column,
                });
            }
        }

        #[cfg(feature = "logging")]
        log::debug!("parsed FEN placement {placement}");

        Ok(builder.build())
    }

    /// Parse a board from FEN, panicking on malformed input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The piece-placement field of FEN for this board.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(ROW_LEN);
        let squares: Vec<_> = self.squares().collect();
        for row_squares in squares.chunks(ROW_LEN) {
            let mut row = String::new();
            let mut empty = 0;
            for square in row_squares {
                if let Some(piece) = square.piece() {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}
