//! Value types shared by every rule module.
//!
//! Squares are validated on construction: the only way to name "no square"
//! is `Option<Square>::None`, so every lookup that reaches the board has
//! already been bounds-checked.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Side::White => 2,
            Side::Black => 7,
        }
    }

    /// Square a double-stepping pawn of this side passes over.
    #[inline]
    pub const fn pawn_skip_rank(self) -> u8 {
        match self {
            Side::White => 3,
            Side::Black => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 8,
            Side::Black => 1,
        }
    }
}

/// Piece kind (side is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// An occupied square's content. Empty squares are `Option<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// Offset of this piece's cell in the renderer's sprite atlas.
    ///
    /// The atlas is laid out as three columns (knight/king, rook/queen,
    /// pawn/bishop) and four rows (black minor, black major, white minor,
    /// white major).
    pub fn sprite_offset(self) -> DragOffset {
        let x = match self.kind {
            PieceKind::Knight | PieceKind::King => 0.0,
            PieceKind::Rook | PieceKind::Queen => 0.25,
            PieceKind::Pawn | PieceKind::Bishop => 0.5,
        };
        let side_row = match self.side {
            Side::White => -0.25,
            Side::Black => 0.0,
        };
        let kind_row = match self.kind {
            PieceKind::Bishop | PieceKind::Queen | PieceKind::King => -0.5,
            _ => 0.0,
        };
        DragOffset {
            x,
            y: side_row + kind_row,
        }
    }
}

/// Texture shift the renderer applies to the piece drawn under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

/// Piece kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    Queen,
    Rook,
    Knight,
    Bishop,
}

impl PromotionKind {
    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Knight => PieceKind::Knight,
            PromotionKind::Bishop => PieceKind::Bishop,
        }
    }

    /// Parse the single-letter choice used by the promotion prompt.
    pub fn from_char(choice: char) -> ChessResult<Self> {
        match choice.to_ascii_lowercase() {
            'q' => Ok(PromotionKind::Queen),
            'r' => Ok(PromotionKind::Rook),
            'n' => Ok(PromotionKind::Knight),
            'b' => Ok(PromotionKind::Bishop),
            _ => Err(ChessErrors::InvalidPromotionChoice(choice)),
        }
    }
}

/// One of the 64 board cells. Index `0 == a1`, `7 == h1`, `63 == h8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from a 1-based rank and file.
    pub fn new(rank: u8, file: u8) -> ChessResult<Self> {
        if !(1..=8).contains(&rank) || !(1..=8).contains(&file) {
            return Err(ChessErrors::InvalidSquare { rank, file });
        }
        Ok(Self((rank - 1) * 8 + (file - 1)))
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Decode the one-byte form: rank in the high nibble, file in the low
    /// nibble, both 1-based. `0x00` and any out-of-range nibble give `None`.
    pub fn from_packed(byte: u8) -> Option<Self> {
        Self::new(byte >> 4, byte & 0x0f).ok()
    }

    #[inline]
    pub const fn packed(self) -> u8 {
        (self.rank() << 4) | self.file()
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square reached by stepping `d_rank` ranks and `d_file` files, if it
    /// is still on the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if !(1..=8).contains(&rank) || !(1..=8).contains(&file) {
            return None;
        }
        Self::new(rank as u8, file as u8).ok()
    }

    /// Signed `(rank, file)` distance from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.rank() as i8 - self.rank() as i8,
            other.file() as i8 - self.file() as i8,
        )
    }

    /// All squares, rank-major starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file() - 1);
        write!(f, "{file}{}", self.rank())
    }
}
