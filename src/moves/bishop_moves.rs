use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

/// Strictly diagonal with nothing in between. The destination itself is not
/// inspected; ownership is the caller's concern.
pub fn check_bishop_move(game_state: &GameState, from: Square, to: Square) -> Option<MoveDescription> {
    diagonal_path_clear(&game_state.board, from, to).then(|| {
        MoveDescription::new(from, to, Piece::new(game_state.side_to_move, PieceKind::Bishop))
    })
}

pub fn diagonal_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta_to(to);
    d_rank != 0 && d_rank.abs() == d_file.abs() && board.path_is_clear(from, to)
}
