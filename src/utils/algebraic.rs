//! Square names such as `e4`.
//!
//! Only single squares are named here; the engine reads and writes no move
//! notation.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a square name (for example "e4") to a [`Square`].
pub fn square_from_algebraic(name: &str) -> ChessResult<Square> {
    let bytes = name.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquareName(name.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquareName(name.to_owned()));
    }

    Square::new(rank - b'0', file - b'a' + 1)
}

/// Parse a square name, treating `off` / `-` as the pointer being outside
/// the board.
pub fn pointer_square(token: &str) -> ChessResult<Option<Square>> {
    match token.trim() {
        "off" | "-" => Ok(None),
        other => square_from_algebraic(other).map(Some),
    }
}
