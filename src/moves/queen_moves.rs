use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::diagonal_path_clear;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::rook_moves::orthogonal_path_clear;

/// Bishop line or rook line. A queen never touches castling rights.
pub fn check_queen_move(game_state: &GameState, from: Square, to: Square) -> Option<MoveDescription> {
    let board = &game_state.board;
    (diagonal_path_clear(board, from, to) || orthogonal_path_clear(board, from, to)).then(|| {
        MoveDescription::new(from, to, Piece::new(game_state.side_to_move, PieceKind::Queen))
    })
}
