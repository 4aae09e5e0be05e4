use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::king_state::CastleWing;

pub const FLAG_CAPTURE: u16 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u16 = 1 << 1;
pub const FLAG_EN_PASSANT: u16 = 1 << 2;
pub const FLAG_CASTLING: u16 = 1 << 3;
pub const FLAG_PROMOTION: u16 = 1 << 4;
pub const FLAG_REVOKES_SHORT: u16 = 1 << 5;
pub const FLAG_REVOKES_LONG: u16 = 1 << 6;

pub const FLAG_REVOKES_BOTH: u16 = FLAG_REVOKES_SHORT | FLAG_REVOKES_LONG;

/// A move a piece rule accepted, with flags naming the side effects the
/// turn controller must apply when it places the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub flags: u16,
}

impl MoveDescription {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            flags: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_flags(mut self, flags: u16) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub const fn has(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    /// Square of the pawn removed by an en passant capture.
    pub fn en_passant_victim(&self) -> Option<Square> {
        if !self.has(FLAG_EN_PASSANT) {
            return None;
        }
        self.to.offset(-self.piece.side.forward(), 0)
    }

    pub fn castling_wing(&self) -> Option<CastleWing> {
        if !self.has(FLAG_CASTLING) {
            return None;
        }
        CastleWing::from_king_target_file(self.to.file())
    }
}
