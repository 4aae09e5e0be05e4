//! Per-side king bookkeeping: where the king stands and which castling
//! rights remain. Rights only ever go from granted to revoked.

use crate::game_state::chess_rules::{
    LONG_CASTLE_KING_FILE, LONG_CASTLE_ROOK_FILE, LONG_ROOK_FILE, SHORT_CASTLE_KING_FILE,
    SHORT_CASTLE_ROOK_FILE, SHORT_ROOK_FILE,
};
use crate::game_state::chess_types::{Side, Square};

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    Short,
    Long,
}

impl CastleWing {
    /// Wing implied by the file the king is dropped on, if any.
    pub fn from_king_target_file(file: u8) -> Option<Self> {
        match file {
            SHORT_CASTLE_KING_FILE => Some(CastleWing::Short),
            LONG_CASTLE_KING_FILE => Some(CastleWing::Long),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleWing::Short => SHORT_ROOK_FILE,
            CastleWing::Long => LONG_ROOK_FILE,
        }
    }

    /// File the rook lands on, which is also the file the king passes over.
    #[inline]
    pub const fn rook_landing_file(self) -> u8 {
        match self {
            CastleWing::Short => SHORT_CASTLE_ROOK_FILE,
            CastleWing::Long => LONG_CASTLE_ROOK_FILE,
        }
    }

    pub fn rook_home(self, side: Side) -> Option<Square> {
        Square::new(side.home_rank(), self.rook_file()).ok()
    }

    pub fn rook_landing(self, side: Side) -> Option<Square> {
        Square::new(side.home_rank(), self.rook_landing_file()).ok()
    }

    /// Wing whose rook starts on `square` for `side`.
    pub fn for_rook_home(side: Side, square: Square) -> Option<Self> {
        if square.rank() != side.home_rank() {
            return None;
        }
        match square.file() {
            SHORT_ROOK_FILE => Some(CastleWing::Short),
            LONG_ROOK_FILE => Some(CastleWing::Long),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub short: bool,
    pub long: bool,
}

impl CastlingRights {
    pub const NONE: Self = Self {
        short: false,
        long: false,
    };
    pub const BOTH: Self = Self {
        short: true,
        long: true,
    };

    #[inline]
    pub const fn allows(self, wing: CastleWing) -> bool {
        match wing {
            CastleWing::Short => self.short,
            CastleWing::Long => self.long,
        }
    }

    #[inline]
    pub fn revoke(&mut self, wing: CastleWing) {
        match wing {
            CastleWing::Short => self.short = false,
            CastleWing::Long => self.long = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self) {
        *self = Self::NONE;
    }

    /// True if every right granted in `self` is also granted in `earlier`.
    #[inline]
    pub const fn is_subset_of(self, earlier: Self) -> bool {
        (!self.short || earlier.short) && (!self.long || earlier.long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingState {
    pub square: Square,
    pub rights: CastlingRights,
}

impl KingState {
    #[inline]
    pub const fn new(square: Square, rights: CastlingRights) -> Self {
        Self { square, rights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wing_from_target_file() {
        assert_eq!(CastleWing::from_king_target_file(7), Some(CastleWing::Short));
        assert_eq!(CastleWing::from_king_target_file(3), Some(CastleWing::Long));
        assert_eq!(CastleWing::from_king_target_file(6), None);
    }

    #[test]
    fn rook_homes_per_side() {
        let h8 = Square::new(8, 8).expect("h8");
        let a1 = Square::new(1, 1).expect("a1");
        assert_eq!(CastleWing::for_rook_home(Side::Black, h8), Some(CastleWing::Short));
        assert_eq!(CastleWing::for_rook_home(Side::White, a1), Some(CastleWing::Long));
        assert_eq!(CastleWing::for_rook_home(Side::White, h8), None);
        assert_eq!(CastleWing::Long.rook_landing(Side::White), Square::new(1, 4).ok());
    }

    #[test]
    fn rights_revoke_independently() {
        let mut rights = CastlingRights::BOTH;
        rights.revoke(CastleWing::Long);
        assert!(rights.allows(CastleWing::Short));
        assert!(!rights.allows(CastleWing::Long));
        assert!(rights.is_subset_of(CastlingRights::BOTH));
        assert!(!CastlingRights::BOTH.is_subset_of(rights));

        rights.revoke_all();
        assert_eq!(rights, CastlingRights::NONE);
    }
}
