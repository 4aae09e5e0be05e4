use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

/// Knights jump, so nothing between origin and destination matters.
pub fn check_knight_move(game_state: &GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let delta = from.delta_to(to);
    KNIGHT_OFFSETS.contains(&delta).then(|| {
        MoveDescription::new(from, to, Piece::new(game_state.side_to_move, PieceKind::Knight))
    })
}
