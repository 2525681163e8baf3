use super::super::types::KNIGHT_OFFSETS;
use super::super::{Board, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves<'b>(&'b self, knight: Piece, moves: &mut MoveList<'b>) {
        self.generate_step_moves(knight, &KNIGHT_OFFSETS, moves);
    }
}
