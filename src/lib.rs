//! Crate root module declarations for the drop_chess rules engine.
//!
//! Exposes the board model, per-piece move rules, the attack scan, the
//! lift/drop turn controller and promotion resolver, plus the pointer and
//! text-rendering helpers used by the binaries.

pub mod chess_errors;
pub mod settings;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod en_passant;
    pub mod game_state;
    pub mod king_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_validation {
    pub mod attack_scan;
    pub mod legal_move_apply;
}

pub mod turn {
    pub mod promotion;
    pub mod turn_controller;
}

pub mod input {
    pub mod pointer_mapping;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
