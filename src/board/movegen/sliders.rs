use super::super::{Board, Move, MoveList, Piece};

impl Board {
    /// Bishop, rook and queen rays.
    ///
    /// Each direction is re-checked for edge-wrap from the square just
    /// reached, not from the origin, so a ray stops at the board edge
    /// instead of continuing on the far side.
    pub(crate) fn generate_slider_moves<'b>(&'b self, slider: Piece, moves: &mut MoveList<'b>) {
        debug_assert!(slider.kind().is_slider());

        for offset in slider.kind().offsets() {
            let mut current = slider.position();
            while let Some(candidate) = offset.apply(current) {
                match self.get_square(candidate).piece() {
                    None => moves.push(Move::normal(self, slider, candidate)),
                    Some(occupant) => {
                        if occupant.alliance() != slider.alliance() {
                            moves.push(Move::capture(self, slider, candidate));
                        }
                        break;
                    }
                }
                current = candidate;
            }
        }
    }
}
