//! The 8x8 occupancy grid.
//!
//! `Board` is plain data: it performs no rule validation. Squares arrive
//! already validated, so every lookup is in range by construction.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            for (file_index, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file_index as u8 + 1;
                if let Ok(square) = Square::new(side.home_rank(), file) {
                    board.set_piece(square, Some(Piece::new(side, *kind)));
                }
                if let Ok(square) = Square::new(side.pawn_start_rank(), file) {
                    board.set_piece(square, Some(Piece::new(side, PieceKind::Pawn)));
                }
            }
        }
        board
    }

    /// Builder used to set up positions.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set_piece(square, Some(piece));
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Occupied squares in rank-major order starting at a1.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.occupied_squares()
            .find(|(_, piece)| *piece == Piece::new(side, PieceKind::King))
            .map(|(square, _)| square)
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a rank, a file or a diagonal; anything else
    /// reports a blocked path. The walk starts next to `from` and moves
    /// toward `to`.
    pub fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let (d_rank, d_file) = from.delta_to(to);
        let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
        if !aligned || from == to {
            return false;
        }

        let step_rank = d_rank.signum();
        let step_file = d_file.signum();
        let mut current = from;
        loop {
            let Some(next) = current.offset(step_rank, step_file) else {
                return false;
            };
            if next == to {
                return true;
            }
            if !self.is_empty_at(next) {
                return false;
            }
            current = next;
        }
    }
}
