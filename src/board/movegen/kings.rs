use super::super::types::KING_OFFSETS;
use super::super::{Board, MoveList, Piece};

impl Board {
    /// One step in any direction. Castling is not generated.
    pub(crate) fn generate_king_moves<'b>(&'b self, king: Piece, moves: &mut MoveList<'b>) {
        self.generate_step_moves(king, &KING_OFFSETS, moves);
    }
}
