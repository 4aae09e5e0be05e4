//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board the way the renderer collaborator sees it: piece per
//! square, the lifted piece's origin marked, orientation following the
//! mirrored display flag, and a status line underneath.

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};
use crate::game_state::game_state::GameState;
use crate::turn::turn_controller::TurnPhase;

const FILE_LABELS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Render the board to a Unicode string for terminal output.
///
/// White's first rank is at the bottom unless `mirrored` is set.
pub fn render_board(game_state: &GameState, mirrored: bool) -> String {
    let ranks: Vec<u8> = if mirrored {
        (1..=8).collect()
    } else {
        (1..=8).rev().collect()
    };
    let files: Vec<u8> = if mirrored {
        (1..=8).rev().collect()
    } else {
        (1..=8).collect()
    };

    let file_header = files
        .iter()
        .map(|file| FILE_LABELS[usize::from(*file - 1)].to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let lifted_from = game_state.selected().map(|selected| selected.from);

    let mut out = String::new();
    out.push_str(&format!("  {file_header}\n"));

    for rank in &ranks {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for (i, file) in files.iter().enumerate() {
            let cell = Square::new(*rank, *file).ok().map_or('?', |square| {
                match game_state.piece_at(square) {
                    Some(piece) => piece_to_unicode(piece),
                    None if lifted_from == Some(square) => '○',
                    None => '·',
                }
            });
            out.push(cell);
            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str(&format!("  {file_header}\n"));
    out.push_str(&status_line(game_state));
    out
}

fn status_line(game_state: &GameState) -> String {
    let side = match game_state.side_to_move {
        Side::White => "white",
        Side::Black => "black",
    };
    match game_state.phase() {
        TurnPhase::Idle => format!("{side} to move"),
        TurnPhase::Selected => match game_state.selected() {
            Some(selected) => format!(
                "{side} to move, holding {} from {}",
                piece_to_unicode(selected.piece),
                selected.from
            ),
            None => format!("{side} to move"),
        },
        TurnPhase::AwaitingPromotion => match game_state.pending_promotion() {
            Some(square) => format!("{side} promotes on {square}: choose q, r, n or b"),
            None => format!("{side} to move"),
        },
    }
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::turn_controller::pick_up;
    use crate::utils::algebraic::square_from_algebraic;

    #[test]
    fn starting_board_has_white_at_the_bottom() {
        let text = render_board(&GameState::new_game(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "white to move");
    }

    #[test]
    fn mirrored_board_flips_both_axes() {
        let text = render_board(&GameState::new_game(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  h g f e d c b a");
        assert_eq!(lines[1], "1 ♖ ♘ ♗ ♔ ♕ ♗ ♘ ♖ 1");
    }

    #[test]
    fn lifted_origin_is_marked() {
        let mut game = GameState::new_game();
        let e2 = square_from_algebraic("e2").expect("e2");
        pick_up(&mut game, Some(e2));
        let text = render_board(&game, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ○ ♙ ♙ ♙ 2");
        assert_eq!(lines[10], "white to move, holding ♙ from e2");
    }
}
