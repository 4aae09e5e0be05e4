//! Finishing a promotion once the player has picked the new piece.

use tracing::{debug, info};

use crate::game_state::chess_types::{Piece, PromotionKind};
use crate::game_state::game_state::GameState;

/// Replace the waiting pawn with `kind` and hand the move to the other side.
///
/// Returns the new piece, or `None` when no promotion is pending.
pub fn resolve_promotion(game_state: &mut GameState, kind: PromotionKind) -> Option<Piece> {
    let Some(square) = game_state.pending_promotion.take() else {
        debug!(?kind, "promotion choice ignored, nothing pending");
        return None;
    };

    let side = game_state.side_to_move;
    let promoted = Piece::new(side, kind.piece_kind());
    game_state.board.set_piece(square, Some(promoted));
    game_state.side_to_move = side.opposite();

    info!(%square, ?promoted, "promotion resolved");
    Some(promoted)
}
