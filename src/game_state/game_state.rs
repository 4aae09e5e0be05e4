//! Core game state.
//!
//! `GameState` is created once per game and mutated only by the turn
//! controller and the promotion resolver. Every engine operation takes it by
//! mutable reference; nothing is stored globally.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};
use crate::game_state::en_passant::EnPassantWindow;
use crate::game_state::king_state::{CastleWing, CastlingRights, KingState};
use crate::turn::turn_controller::{SelectedMove, TurnPhase};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    /// Indexed by [`Side::index`].
    pub kings: [KingState; 2],
    pub en_passant: EnPassantWindow,

    // --- Interaction state ---
    pub(crate) selected: Option<SelectedMove>,
    pub(crate) pending_promotion: Option<Square>,

    // Set while an attack scan runs; suppresses the castling branch.
    pub(crate) scanning: bool,
}

/// Everything a rejected drop must put back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSnapshot {
    board: Board,
    kings: [KingState; 2],
    en_passant: EnPassantWindow,
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Side::White)
            .expect("starting position always has both kings")
    }

    /// Set up an arbitrary position.
    ///
    /// A castling right is granted only when the king is on its home square
    /// and the matching rook is on its corner.
    pub fn from_board(board: Board, side_to_move: Side) -> ChessResult<Self> {
        let white = king_state_for(&board, Side::White)?;
        let black = king_state_for(&board, Side::Black)?;
        Ok(Self {
            board,
            side_to_move,
            kings: [white, black],
            en_passant: EnPassantWindow::default(),
            selected: None,
            pending_promotion: None,
            scanning: false,
        })
    }

    #[inline]
    pub fn king(&self, side: Side) -> &KingState {
        &self.kings[side.index()]
    }

    #[inline]
    pub fn king_mut(&mut self, side: Side) -> &mut KingState {
        &mut self.kings[side.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// The piece currently under the pointer, if a move is in progress.
    #[inline]
    pub fn selected(&self) -> Option<&SelectedMove> {
        self.selected.as_ref()
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub fn is_awaiting_promotion(&self) -> bool {
        self.pending_promotion.is_some()
    }

    #[inline]
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn phase(&self) -> TurnPhase {
        if self.pending_promotion.is_some() {
            TurnPhase::AwaitingPromotion
        } else if self.selected.is_some() {
            TurnPhase::Selected
        } else {
            TurnPhase::Idle
        }
    }

    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            board: self.board,
            kings: self.kings,
            en_passant: self.en_passant,
        }
    }

    pub fn restore(&mut self, snapshot: RuleSnapshot) {
        self.board = snapshot.board;
        self.kings = snapshot.kings;
        self.en_passant = snapshot.en_passant;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

fn king_state_for(board: &Board, side: Side) -> ChessResult<KingState> {
    let square = board
        .find_king(side)
        .ok_or(ChessErrors::MissingKing(side))?;

    let mut rights = CastlingRights::NONE;
    if square.rank() == side.home_rank() && square.file() == KING_HOME_FILE {
        let rook = Some(Piece::new(side, PieceKind::Rook));
        for wing in [CastleWing::Short, CastleWing::Long] {
            if wing.rook_home(side).and_then(|s| board.piece_at(s)) == rook {
                match wing {
                    CastleWing::Short => rights.short = true,
                    CastleWing::Long => rights.long = true,
                }
            }
        }
    }
    Ok(KingState::new(square, rights))
}
