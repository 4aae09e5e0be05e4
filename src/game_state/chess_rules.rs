//! Canonical chess-rule constants.
//!
//! Files and ranks are 1-based, file 1 is the a-file.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout from file 1 to file 8.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_FILE: u8 = 5;

pub const SHORT_ROOK_FILE: u8 = 8;
pub const LONG_ROOK_FILE: u8 = 1;

pub const SHORT_CASTLE_KING_FILE: u8 = 7;
pub const LONG_CASTLE_KING_FILE: u8 = 3;

pub const SHORT_CASTLE_ROOK_FILE: u8 = 6;
pub const LONG_CASTLE_ROOK_FILE: u8 = 4;

/// Plies the en passant window stays armed after a double step.
pub const EN_PASSANT_WINDOW_PLIES: u8 = 2;

/// (rank, file) offsets of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
