//! Placing an accepted move on the board.
//!
//! Runs inside the turn controller's transaction: everything touched here
//! (board, king squares, castling rights) is covered by the snapshot taken
//! before the drop, so a later self-check rejection can undo it wholesale.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::king_state::CastleWing;
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_REVOKES_LONG, FLAG_REVOKES_SHORT,
};

pub fn apply_move(game_state: &mut GameState, mv: &MoveDescription) {
    let side = mv.piece.side;

    game_state.board.set_piece(mv.from, None);
    game_state.board.set_piece(mv.to, Some(mv.piece));

    if let Some(victim) = mv.en_passant_victim() {
        game_state.board.set_piece(victim, None);
    }

    if let Some(wing) = mv.castling_wing() {
        move_castling_rook(game_state, mv, wing);
    }

    let king = game_state.king_mut(side);
    if mv.has(FLAG_REVOKES_SHORT) {
        king.rights.revoke(CastleWing::Short);
    }
    if mv.has(FLAG_REVOKES_LONG) {
        king.rights.revoke(CastleWing::Long);
    }
    if mv.piece.kind == PieceKind::King {
        king.square = mv.to;
    }

    // Taking a rook on its corner removes the owner's matching right.
    if mv.has(FLAG_CAPTURE) {
        let enemy = side.opposite();
        if let Some(wing) = CastleWing::for_rook_home(enemy, mv.to) {
            game_state.king_mut(enemy).rights.revoke(wing);
        }
    }
}

fn move_castling_rook(game_state: &mut GameState, mv: &MoveDescription, wing: CastleWing) {
    let side = mv.piece.side;
    let (Some(rook_home), Some(rook_landing)) = (wing.rook_home(side), wing.rook_landing(side))
    else {
        return;
    };
    game_state.board.set_piece(rook_home, None);
    game_state
        .board
        .set_piece(rook_landing, Some(Piece::new(side, PieceKind::Rook)));
}
