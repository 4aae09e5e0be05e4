//! Single entry point from a piece kind to its legality rule.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::check_bishop_move;
use crate::moves::king_moves::check_king_move;
use crate::moves::knight_moves::check_knight_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::check_pawn_move;
use crate::moves::queen_moves::check_queen_move;
use crate::moves::rook_moves::check_rook_move;

/// Ask the rule for `kind` whether the side to move may take a piece of that
/// kind from `from` to `to`. Destination ownership is checked by the caller.
pub fn check_piece_move(
    game_state: &mut GameState,
    kind: PieceKind,
    from: Square,
    to: Square,
) -> Option<MoveDescription> {
    match kind {
        PieceKind::Pawn => check_pawn_move(game_state, from, to),
        PieceKind::Knight => check_knight_move(game_state, from, to),
        PieceKind::Bishop => check_bishop_move(game_state, from, to),
        PieceKind::Rook => check_rook_move(game_state, from, to),
        PieceKind::Queen => check_queen_move(game_state, from, to),
        PieceKind::King => check_king_move(game_state, from, to),
    }
}
