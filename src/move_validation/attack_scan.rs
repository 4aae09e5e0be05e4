//! Attack detection.
//!
//! A square is attacked when some piece of the side *not* to move could
//! legally go there by its ordinary movement rule. The scan flips the side
//! to move and raises the scanning flag for its duration through
//! [`AttackScan`], which puts both back when dropped, so every return path
//! restores the caller's view.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::game_state::chess_types::{Piece, Side, Square};
use crate::game_state::game_state::GameState;
use crate::moves::piece_rules::check_piece_move;

/// Scoped view of a game seen from the opponent's side.
pub struct AttackScan<'a> {
    game_state: &'a mut GameState,
    restore_side: Side,
    restore_scanning: bool,
}

impl<'a> AttackScan<'a> {
    pub fn begin(game_state: &'a mut GameState) -> Self {
        let restore_side = game_state.side_to_move;
        let restore_scanning = game_state.scanning;
        game_state.side_to_move = restore_side.opposite();
        game_state.scanning = true;
        Self {
            game_state,
            restore_side,
            restore_scanning,
        }
    }
}

impl Deref for AttackScan<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for AttackScan<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for AttackScan<'_> {
    fn drop(&mut self) {
        self.game_state.side_to_move = self.restore_side;
        self.game_state.scanning = self.restore_scanning;
    }
}

/// Whether any piece of the side not to move attacks `target`.
pub fn is_square_attacked(game_state: &mut GameState, target: Square) -> bool {
    first_attacker(game_state, target).is_some()
}

/// The first attacker of `target` in rank-major order, if any.
pub fn first_attacker(game_state: &mut GameState, target: Square) -> Option<(Square, Piece)> {
    let mut scan = AttackScan::begin(game_state);
    let attacker = scan.side_to_move;

    for from in Square::all() {
        if from == target {
            continue;
        }
        let Some(piece) = scan.board.piece_at(from) else {
            continue;
        };
        if piece.side != attacker {
            continue;
        }
        if check_piece_move(&mut scan, piece.kind, from, target).is_some() {
            trace!(%target, %from, ?piece, "square attacked");
            return Some((from, piece));
        }
    }
    None
}

/// Whether `side`'s king is attacked by the other side.
pub fn is_in_check(game_state: &mut GameState, side: Side) -> bool {
    let king_square = game_state.king(side).square;
    if side == game_state.side_to_move {
        return is_square_attacked(game_state, king_square);
    }
    // Look from the other side's seat so the scan runs for `side`'s enemy.
    let mut seat = AttackScan::begin(game_state);
    seat.scanning = false;
    is_square_attacked(&mut seat, king_square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::algebraic::square_from_algebraic;

    fn sq(name: &str) -> Square {
        square_from_algebraic(name).expect("test square should parse")
    }

    fn position(extra: &[(&str, Side, PieceKind)], side_to_move: Side) -> GameState {
        let mut board = Board::empty()
            .with_piece(sq("e1"), Piece::new(Side::White, PieceKind::King))
            .with_piece(sq("e8"), Piece::new(Side::Black, PieceKind::King));
        for (name, side, kind) in extra {
            board = board.with_piece(sq(name), Piece::new(*side, *kind));
        }
        GameState::from_board(board, side_to_move).expect("kings present")
    }

    #[test]
    fn scan_restores_side_and_flag() {
        let mut game = GameState::new_game();
        assert!(!is_square_attacked(&mut game, sq("e4")));
        assert!(is_square_attacked(&mut game, sq("f6")));
        assert_eq!(game.side_to_move, Side::White);
        assert!(!game.is_scanning());
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let mut game = position(&[("d5", Side::Black, PieceKind::Pawn)], Side::White);
        assert!(is_square_attacked(&mut game, sq("c4")));
        assert!(is_square_attacked(&mut game, sq("e4")));
        assert!(!is_square_attacked(&mut game, sq("d4")));
        assert!(!is_square_attacked(&mut game, sq("c6")));
    }

    #[test]
    fn sliders_are_blocked() {
        let mut game = position(
            &[
                ("a4", Side::Black, PieceKind::Rook),
                ("c4", Side::White, PieceKind::Knight),
            ],
            Side::White,
        );
        assert!(is_square_attacked(&mut game, sq("b4")));
        assert!(is_square_attacked(&mut game, sq("c4")));
        assert!(!is_square_attacked(&mut game, sq("d4")));
    }

    #[test]
    fn only_the_opponent_attacks() {
        let mut game = position(&[("a4", Side::White, PieceKind::Rook)], Side::White);
        assert!(!is_square_attacked(&mut game, sq("a7")));

        game.side_to_move = Side::Black;
        assert!(is_square_attacked(&mut game, sq("a7")));
    }

    #[test]
    fn first_attacker_reports_square_and_piece() {
        let mut game = position(&[("b4", Side::Black, PieceKind::Bishop)], Side::White);
        assert_eq!(
            first_attacker(&mut game, sq("e1")),
            Some((sq("b4"), Piece::new(Side::Black, PieceKind::Bishop)))
        );
    }

    #[test]
    fn in_check_for_either_side() {
        let mut game = position(&[("e5", Side::White, PieceKind::Rook)], Side::White);
        assert!(is_in_check(&mut game, Side::Black));
        assert!(!is_in_check(&mut game, Side::White));
        assert_eq!(game.side_to_move, Side::White);
        assert!(!game.is_scanning());
    }

    #[test]
    fn nested_scan_restores_outer_state() {
        let mut game = GameState::new_game();
        {
            let mut outer = AttackScan::begin(&mut game);
            assert_eq!(outer.side_to_move, Side::Black);
            {
                let inner = AttackScan::begin(&mut outer);
                assert_eq!(inner.side_to_move, Side::White);
            }
            assert_eq!(outer.side_to_move, Side::Black);
            assert!(outer.is_scanning());
        }
        assert_eq!(game.side_to_move, Side::White);
        assert!(!game.is_scanning());
    }
}
