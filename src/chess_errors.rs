//! Errors used throughout the rules engine.
//!
//! Only fallible factories and parsers produce these: square construction,
//! square names, promotion choices, position setup, settings and driver
//! commands. The turn operations themselves never fail; an input they cannot
//! honour is reported through their outcome value and leaves the game
//! untouched.

use thiserror::Error;

use crate::game_state::chess_types::Side;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A rank or file outside `1..=8` was given to a square factory.
    #[error("square out of range: rank {rank}, file {file} (both must be 1-8)")]
    InvalidSquare { rank: u8, file: u8 },

    /// A square name such as `e4` could not be parsed.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    /// A promotion choice other than queen, rook, knight or bishop.
    #[error("invalid promotion choice '{0}' (expected one of q, r, n, b)")]
    InvalidPromotionChoice(char),

    /// A position was set up without a king for one side.
    #[error("position has no {0:?} king")]
    MissingKing(Side),

    /// A configuration value could not be interpreted.
    #[error("invalid setting {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },

    /// The terminal driver received a line it does not understand.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

/// Result alias for fallible engine constructors and parsers.
pub type ChessResult<T> = Result<T, ChessErrors>;
