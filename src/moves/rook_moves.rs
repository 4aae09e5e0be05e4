use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::king_state::CastleWing;
use crate::moves::move_descriptions::{MoveDescription, FLAG_REVOKES_LONG, FLAG_REVOKES_SHORT};

/// Strictly orthogonal with nothing in between.
///
/// A rook leaving its home corner revokes the matching castling right of
/// the side to move, every time it does so.
pub fn check_rook_move(game_state: &GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let side = game_state.side_to_move;
    if !orthogonal_path_clear(&game_state.board, from, to) {
        return None;
    }

    let mv = MoveDescription::new(from, to, Piece::new(side, PieceKind::Rook));
    Some(match CastleWing::for_rook_home(side, from) {
        Some(CastleWing::Short) => mv.with_flags(FLAG_REVOKES_SHORT),
        Some(CastleWing::Long) => mv.with_flags(FLAG_REVOKES_LONG),
        None => mv,
    })
}

pub fn orthogonal_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    (d_rank == 0) != (d_file == 0) && board.path_is_clear(from, to)
}
