//! Two-phase move protocol: lift a piece, then try to drop it.
//!
//! `Idle -> Selected -> {Idle | AwaitingPromotion}`. A drop is a small
//! transaction: snapshot, apply, test for self-check, then commit or roll
//! back. Every rejecting path goes through the same rollback, so a failed
//! attempt never leaves partial changes behind.

use tracing::{debug, info};

use crate::game_state::chess_types::{DragOffset, Piece, Square};
use crate::game_state::game_state::{GameState, RuleSnapshot};
use crate::move_validation::attack_scan::is_square_attacked;
use crate::move_validation::legal_move_apply::apply_move;
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_PROMOTION,
};
use crate::moves::piece_rules::check_piece_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Selected,
    AwaitingPromotion,
}

/// The lifted piece, alive between a press and the matching release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedMove {
    pub from: Square,
    pub piece: Piece,
    pub drag_offset: DragOffset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickUpOutcome {
    Lifted(SelectedMove),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OffBoard,
    EmptySquare,
    NotSideToMove,
    MoveInProgress,
    AwaitingPromotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    NothingSelected,
    Rejected(RejectReason),
    Committed(MoveDescription),
    AwaitingPromotion(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OffBoard,
    SameSquare,
    OwnPiece,
    IllegalMove,
    SelfCheck,
}

/// Pointer pressed on `square` (`None` when outside the board).
pub fn pick_up(game_state: &mut GameState, square: Option<Square>) -> PickUpOutcome {
    let outcome = try_pick_up(game_state, square);
    match outcome {
        PickUpOutcome::Lifted(selected) => {
            debug!(from = %selected.from, piece = ?selected.piece, "piece lifted");
        }
        PickUpOutcome::Ignored(reason) => {
            debug!(square = ?square.map(|s| s.to_string()), ?reason, "press ignored");
        }
    }
    outcome
}

fn try_pick_up(game_state: &mut GameState, square: Option<Square>) -> PickUpOutcome {
    if game_state.pending_promotion.is_some() {
        return PickUpOutcome::Ignored(IgnoreReason::AwaitingPromotion);
    }
    if game_state.selected.is_some() {
        return PickUpOutcome::Ignored(IgnoreReason::MoveInProgress);
    }
    let Some(from) = square else {
        return PickUpOutcome::Ignored(IgnoreReason::OffBoard);
    };
    let piece = match game_state.board.take_piece(from) {
        None => return PickUpOutcome::Ignored(IgnoreReason::EmptySquare),
        Some(piece) if piece.side != game_state.side_to_move => {
            game_state.board.set_piece(from, Some(piece));
            return PickUpOutcome::Ignored(IgnoreReason::NotSideToMove);
        }
        Some(piece) => piece,
    };
    let selected = SelectedMove {
        from,
        piece,
        drag_offset: piece.sprite_offset(),
    };
    game_state.selected = Some(selected);
    PickUpOutcome::Lifted(selected)
}

/// Pointer released on `square` (`None` when outside the board).
pub fn drop_piece(game_state: &mut GameState, square: Option<Square>) -> DropOutcome {
    let Some(selected) = game_state.selected.take() else {
        return DropOutcome::NothingSelected;
    };
    let snapshot = game_state.snapshot();

    let mv = match validate_drop(game_state, &selected, square) {
        Ok(mv) => mv,
        Err(reason) => return roll_back(game_state, snapshot, &selected, reason),
    };

    apply_move(game_state, &mv);

    let king_square = game_state.king(selected.piece.side).square;
    if is_square_attacked(game_state, king_square) {
        return roll_back(game_state, snapshot, &selected, RejectReason::SelfCheck);
    }

    commit(game_state, mv)
}

fn validate_drop(
    game_state: &mut GameState,
    selected: &SelectedMove,
    square: Option<Square>,
) -> Result<MoveDescription, RejectReason> {
    let to = square.ok_or(RejectReason::OffBoard)?;
    if to == selected.from {
        return Err(RejectReason::SameSquare);
    }
    let occupant = game_state.board.piece_at(to);
    if occupant.is_some_and(|occupant| occupant.side == selected.piece.side) {
        return Err(RejectReason::OwnPiece);
    }
    let mv = check_piece_move(game_state, selected.piece.kind, selected.from, to)
        .ok_or(RejectReason::IllegalMove)?;

    // Any occupied destination left at this point holds an enemy piece.
    Ok(if occupant.is_some() {
        mv.with_flags(FLAG_CAPTURE)
    } else {
        mv
    })
}

fn roll_back(
    game_state: &mut GameState,
    snapshot: RuleSnapshot,
    selected: &SelectedMove,
    reason: RejectReason,
) -> DropOutcome {
    game_state.restore(snapshot);
    game_state
        .board
        .set_piece(selected.from, Some(selected.piece));
    debug!(from = %selected.from, ?reason, "drop rejected, piece returned");
    DropOutcome::Rejected(reason)
}

fn commit(game_state: &mut GameState, mv: MoveDescription) -> DropOutcome {
    game_state.en_passant.tick();
    if mv.has(FLAG_DOUBLE_PAWN_PUSH) {
        game_state.en_passant.arm(mv.piece.side, mv.to.file());
    }

    if mv.has(FLAG_PROMOTION) {
        game_state.pending_promotion = Some(mv.to);
        info!(from = %mv.from, to = %mv.to, "pawn reached last rank, awaiting promotion");
        return DropOutcome::AwaitingPromotion(mv.to);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    info!(from = %mv.from, to = %mv.to, piece = ?mv.piece, flags = mv.flags, "move committed");
    DropOutcome::Committed(mv)
}
