//! King legality: single steps and castling.
//!
//! A step is always geometrically legal; whether it walks into check is
//! decided afterwards by the turn controller. Castling is decided here,
//! including the three attack checks, and is skipped entirely while an
//! attack scan is running so the scan can never recurse into itself.

use tracing::trace;

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::king_state::CastleWing;
use crate::move_validation::attack_scan::is_square_attacked;
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CASTLING, FLAG_REVOKES_BOTH,
};

pub fn check_king_move(game_state: &mut GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let piece = Piece::new(game_state.side_to_move, PieceKind::King);
    let (d_rank, d_file) = from.delta_to(to);

    if d_rank.abs().max(d_file.abs()) == 1 {
        return Some(MoveDescription::new(from, to, piece).with_flags(FLAG_REVOKES_BOTH));
    }

    if game_state.is_scanning() {
        return None;
    }

    check_castling(game_state, from, to)
}

fn check_castling(game_state: &mut GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let side = game_state.side_to_move;
    let wing = CastleWing::from_king_target_file(to.file())?;
    let king = *game_state.king(side);

    if !king.rights.allows(wing) || from != king.square || to.rank() != side.home_rank() {
        return None;
    }

    let rook_home = wing.rook_home(side)?;
    if game_state.board.piece_at(rook_home) != Some(Piece::new(side, PieceKind::Rook)) {
        return None;
    }
    if !game_state.board.path_is_clear(from, rook_home) {
        trace!(%from, %to, ?wing, "castling blocked by a piece between king and rook");
        return None;
    }

    let passed = wing.rook_landing(side)?;
    for square in [king.square, to, passed] {
        if is_square_attacked(game_state, square) {
            trace!(%square, ?wing, "castling denied, square is attacked");
            return None;
        }
    }

    Some(
        MoveDescription::new(from, to, Piece::new(side, PieceKind::King))
            .with_flags(FLAG_CASTLING | FLAG_REVOKES_BOTH),
    )
}
