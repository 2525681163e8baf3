//! Per-piece move generation.
//!
//! Every piece kind follows the same shape: walk a fixed table of candidate
//! steps, drop any step that leaves the board or wraps around a side edge,
//! then look at the destination square. Empty squares yield a normal move,
//! opposing pieces a capture, own pieces nothing. Sliders repeat each step
//! until something stops them. Generation only reads the board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::Offset;
use super::{Alliance, Board, Coord, Move, MoveList, Piece, PieceKind};

impl Piece {
    /// Every primitive move this piece can make on `board`.
    ///
    /// Moves come out in the order of the piece's candidate table, so the
    /// result is the same sequence every time for the same board and piece.
    /// Castling, en passant and promotion are not produced.
    #[must_use]
    pub fn calculate_legal_moves<'b>(&self, board: &'b Board) -> MoveList<'b> {
        let mut moves = MoveList::new();
        match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(*self, &mut moves),
            PieceKind::Knight => board.generate_knight_moves(*self, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                board.generate_slider_moves(*self, &mut moves);
            }
            PieceKind::King => board.generate_king_moves(*self, &mut moves),
        }
        moves
    }
}

impl Board {
    /// Moves for every piece of `alliance`, in coordinate order of the pieces.
    #[must_use]
    pub fn calculate_legal_moves(&self, alliance: Alliance) -> MoveList<'_> {
        let mut moves = MoveList::new();
        for piece in self.pieces(alliance) {
            moves.extend(piece.calculate_legal_moves(self));
        }
        moves
    }

    /// Single-step generation shared by knights and kings.
    fn generate_step_moves<'b>(
        &'b self,
        piece: Piece,
        offsets: &[Offset],
        moves: &mut MoveList<'b>,
    ) {
        for offset in offsets {
            if let Some(destination) = offset.apply(piece.position()) {
                if let Some(mv) = self.occupancy_move(piece, destination) {
                    moves.push(mv);
                }
            }
        }
    }

    /// Normal move to an empty square, capture of an opposing piece, or
    /// nothing when the mover's own alliance holds the square.
    #[inline]
    fn occupancy_move<'b>(&'b self, piece: Piece, destination: Coord) -> Option<Move<'b>> {
        match self.get_square(destination).piece() {
            None => Some(Move::normal(self, piece, destination)),
            Some(occupant) if occupant.alliance() != piece.alliance() => {
                Some(Move::capture(self, piece, destination))
            }
            Some(_) => None,
        }
    }
}
