//! Knight move generation tests.

use super::{c, destinations, lone_destinations};
use crate::board::{Alliance, BoardBuilder, MoveKind, Piece, PieceKind};

#[test]
fn test_knight_in_corner_has_two_moves() {
    assert_eq!(
        lone_destinations(PieceKind::Knight, Alliance::White, 0),
        vec![10, 17]
    );
}

#[test]
fn test_knight_in_center_has_eight_moves() {
    assert_eq!(
        lone_destinations(PieceKind::Knight, Alliance::Black, 27),
        vec![10, 12, 17, 21, 33, 37, 42, 44]
    );
}

#[test]
fn test_knight_other_corners() {
    assert_eq!(
        lone_destinations(PieceKind::Knight, Alliance::White, 7),
        vec![13, 22]
    );
    assert_eq!(
        lone_destinations(PieceKind::Knight, Alliance::White, 56),
        vec![41, 50]
    );
    assert_eq!(
        lone_destinations(PieceKind::Knight, Alliance::White, 63),
        vec![46, 53]
    );
}

#[test]
fn test_knight_on_h_file_never_wraps_to_a_file() {
    // h5: +10 and -6 would land on the b file if columns were not checked
    let moves = lone_destinations(PieceKind::Knight, Alliance::White, 31);
    assert_eq!(moves, vec![14, 21, 37, 46]);
    assert!(moves.iter().all(|&idx| idx % 8 >= 5));
}

#[test]
fn test_knight_captures_only_opposing_pieces() {
    let knight = Piece::new(PieceKind::Knight, Alliance::White, c(0));
    let board = BoardBuilder::new()
        .place(knight)
        .piece(c(10), Alliance::Black, PieceKind::Rook)
        .piece(c(17), Alliance::White, PieceKind::Pawn)
        .build();

    let moves = knight.calculate_legal_moves(&board);
    assert_eq!(destinations(&moves), vec![10]);
    assert_eq!(moves[0].kind(), MoveKind::Capture);
    assert_eq!(
        moves[0].attacked_piece().map(|p| p.kind()),
        Some(PieceKind::Rook)
    );
}

#[test]
fn test_knight_jumps_over_blockers() {
    let knight = Piece::new(PieceKind::Knight, Alliance::Black, c(1));
    let board = BoardBuilder::starting_position().build();

    let moves = knight.calculate_legal_moves(&board);
    assert_eq!(destinations(&moves), vec![16, 18]);
    assert!(moves.iter().all(|m| !m.is_capture()));
}
