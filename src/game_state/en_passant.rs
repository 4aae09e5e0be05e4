//! En passant eligibility window.
//!
//! Armed with a countdown of two on a double pawn step and ticked once per
//! committed move. The tick runs before a new double step re-arms it, so the
//! countdown reads 2 right after the double step, 1 after the reply and 0
//! after that. Only the reply can use it: the capturer must be the other
//! side.

use crate::game_state::chess_rules::EN_PASSANT_WINDOW_PLIES;
use crate::game_state::chess_types::{Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnPassantWindow {
    countdown: u8,
    file: u8,
    pawn_side: Option<Side>,
}

impl EnPassantWindow {
    pub fn arm(&mut self, pawn_side: Side, file: u8) {
        self.countdown = EN_PASSANT_WINDOW_PLIES;
        self.file = file;
        self.pawn_side = Some(pawn_side);
    }

    pub fn tick(&mut self) {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.pawn_side = None;
        }
    }

    #[inline]
    pub const fn countdown(&self) -> u8 {
        self.countdown
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        self.countdown > 0
    }

    /// File of the pawn that double-stepped, while the window is open.
    pub fn file(&self) -> Option<u8> {
        self.is_active().then_some(self.file)
    }

    /// Whether a pawn of `capturer` may land on `to` as an en passant capture.
    pub fn allows_capture(&self, capturer: Side, to: Square) -> bool {
        match self.pawn_side {
            Some(pawn_side) if self.is_active() && pawn_side != capturer => {
                to.file() == self.file && to.rank() == pawn_side.pawn_skip_rank()
            }
            _ => false,
        }
    }
}
