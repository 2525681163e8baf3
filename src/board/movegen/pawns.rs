use super::super::types::{Offset, ROW_LEN};
use super::super::{Alliance, Board, Move, MoveList, Piece};

/// Forward steps and diagonal attacks for one alliance, in table order
/// push, jump, then the 7 and 9 diagonals.
const fn pawn_offsets(alliance: Alliance) -> [Offset; 4] {
    let dir = alliance.direction();
    let row = ROW_LEN as i8;
    [
        Offset::new(row * dir, 0),
        Offset::new(2 * row * dir, 0),
        Offset::new((row - 1) * dir, -dir),
        Offset::new((row + 1) * dir, dir),
    ]
}

const WHITE_PAWN_OFFSETS: [Offset; 4] = pawn_offsets(Alliance::White);
const BLACK_PAWN_OFFSETS: [Offset; 4] = pawn_offsets(Alliance::Black);

impl Board {
    /// Single push, two-square jump from the starting row, and diagonal
    /// captures. Pushes never capture and diagonals only capture.
    pub(crate) fn generate_pawn_moves<'b>(&'b self, pawn: Piece, moves: &mut MoveList<'b>) {
        let alliance = pawn.alliance();
        let [push, jump, attack_7, attack_9] = match alliance {
            Alliance::White => WHITE_PAWN_OFFSETS,
            Alliance::Black => BLACK_PAWN_OFFSETS,
        };
        let from = pawn.position();

        if let Some(ahead) = push.apply(from) {
            if !self.get_square(ahead).is_occupied() {
                moves.push(Move::normal(self, pawn, ahead));

                if from.row() == alliance.pawn_start_row() {
                    if let Some(target) = jump.apply(from) {
                        if !self.get_square(target).is_occupied() {
                            moves.push(Move::pawn_jump(self, pawn, target));
                        }
                    }
                }
            }
        }

        for attack in [attack_7, attack_9] {
            let Some(target) = attack.apply(from) else {
                continue;
            };
            if let Some(occupant) = self.get_square(target).piece() {
                if occupant.alliance() != alliance {
                    moves.push(Move::capture(self, pawn, target));
                }
            }
        }
    }
}
