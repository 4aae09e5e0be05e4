//! Pointer coordinates to board squares.
//!
//! The board is drawn in the largest square that fits the window, centered,
//! with the leftover space left blank on the long axis. Pixel coordinates
//! come in with the origin at the top-left corner and y growing downward;
//! normalized board coordinates run from -1 to 1 on both axes with y up.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse `WIDTHxHEIGHT`, e.g. `1024x768`.
    pub fn parse(text: &str) -> ChessResult<Self> {
        let invalid = || ChessErrors::InvalidSetting {
            name: "viewport",
            value: text.to_owned(),
        };
        let (w, h) = text
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }

    /// Side length of the drawn board in pixels.
    pub fn board_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Map a window pixel to normalized board coordinates.
    ///
    /// Returns `None` for pixels in the letterbox margins or outside the
    /// window.
    pub fn to_normalized(&self, px: f64, py: f64) -> Option<(f64, f64)> {
        let side = self.board_side();
        if side <= 0.0 {
            return None;
        }
        let left = (f64::from(self.width) - side) / 2.0;
        let top = (f64::from(self.height) - side) / 2.0;
        let local_x = px - left;
        let local_y = py - top;
        if !(0.0..side).contains(&local_x) || !(0.0..side).contains(&local_y) {
            return None;
        }
        Some((2.0 * local_x / side - 1.0, 1.0 - 2.0 * local_y / side))
    }
}

/// Bin normalized board coordinates into one of the 64 squares.
///
/// Unmirrored, White's first rank is at the bottom and the a-file on the
/// left. Mirroring turns the picture around (both axes flip).
pub fn square_from_normalized(x: f64, y: f64, mirrored: bool) -> Option<Square> {
    if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
        return None;
    }
    let column = bin(x);
    let row = bin(y);
    let (column, row) = if mirrored {
        (7 - column, 7 - row)
    } else {
        (column, row)
    };
    Square::new(row + 1, column + 1).ok()
}

/// Pixel position straight to a square, `None` when the pointer is off the
/// board.
pub fn square_from_pixels(viewport: &Viewport, px: f64, py: f64, mirrored: bool) -> Option<Square> {
    let (x, y) = viewport.to_normalized(px, py)?;
    square_from_normalized(x, y, mirrored)
}

fn bin(coordinate: f64) -> u8 {
    // The +1.0 edge belongs to the last bin.
    let scaled = ((coordinate + 1.0) * 4.0).floor();
    scaled.clamp(0.0, 7.0) as u8
}
