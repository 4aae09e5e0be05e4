//! Pawn legality.
//!
//! Forward pushes onto empty squares, a double step from the start rank,
//! diagonal captures and en passant. During an attack scan only the capture
//! geometry counts: the target is treated as a hostile occupant.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_PROMOTION,
};

pub fn check_pawn_move(game_state: &GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let side = game_state.side_to_move;
    let piece = Piece::new(side, PieceKind::Pawn);
    let forward = side.forward();
    let (d_rank, d_file) = from.delta_to(to);

    if game_state.is_scanning() {
        return (d_rank == forward && d_file.abs() == 1)
            .then(|| MoveDescription::new(from, to, piece).with_flags(FLAG_CAPTURE));
    }

    let board = &game_state.board;
    let mv = MoveDescription::new(from, to, piece);

    let accepted = if d_file == 0 {
        if d_rank == forward && board.is_empty_at(to) {
            Some(mv)
        } else if d_rank == 2 * forward
            && from.rank() == side.pawn_start_rank()
            && board.is_empty_at(to)
            && from.offset(forward, 0).is_some_and(|skip| board.is_empty_at(skip))
        {
            Some(mv.with_flags(FLAG_DOUBLE_PAWN_PUSH))
        } else {
            None
        }
    } else if d_file.abs() == 1 && d_rank == forward {
        match board.piece_at(to) {
            Some(target) if target.side != side => Some(mv.with_flags(FLAG_CAPTURE)),
            Some(_) => None,
            None if en_passant_available(game_state, to) => Some(mv.with_flags(FLAG_EN_PASSANT)),
            None => None,
        }
    } else {
        None
    };

    accepted.map(|mv| {
        if to.rank() == side.promotion_rank() {
            mv.with_flags(FLAG_PROMOTION)
        } else {
            mv
        }
    })
}

fn en_passant_available(game_state: &GameState, to: Square) -> bool {
    let side = game_state.side_to_move;
    if !game_state.en_passant.allows_capture(side, to) {
        return false;
    }
    let victim = Piece::new(side.opposite(), PieceKind::Pawn);
    to.offset(-side.forward(), 0)
        .and_then(|square| game_state.board.piece_at(square))
        == Some(victim)
}
