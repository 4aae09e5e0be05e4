//! End-to-end lift/drop scenarios through the public API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drop_chess::game_state::board::Board;
use drop_chess::game_state::chess_types::{Piece, PieceKind, PromotionKind, Side, Square};
use drop_chess::game_state::game_state::GameState;
use drop_chess::game_state::king_state::CastlingRights;
use drop_chess::move_validation::attack_scan::is_in_check;
use drop_chess::moves::move_descriptions::FLAG_CAPTURE;
use drop_chess::turn::promotion::resolve_promotion;
use drop_chess::turn::turn_controller::{
    drop_piece, pick_up, DropOutcome, IgnoreReason, PickUpOutcome, RejectReason, TurnPhase,
};
use drop_chess::utils::algebraic::square_from_algebraic;

fn sq(name: &str) -> Square {
    square_from_algebraic(name).expect("test square should parse")
}

fn play(game: &mut GameState, from: &str, to: &str) -> DropOutcome {
    pick_up(game, Some(sq(from)));
    drop_piece(game, Some(sq(to)))
}

fn commit(game: &mut GameState, from: &str, to: &str) {
    let outcome = play(game, from, to);
    assert!(
        matches!(outcome, DropOutcome::Committed(_)),
        "{from}-{to} should commit, got {outcome:?}"
    );
}

fn castling_board() -> Board {
    Board::empty()
        .with_piece(sq("e1"), Piece::new(Side::White, PieceKind::King))
        .with_piece(sq("a1"), Piece::new(Side::White, PieceKind::Rook))
        .with_piece(sq("h1"), Piece::new(Side::White, PieceKind::Rook))
        .with_piece(sq("h8"), Piece::new(Side::Black, PieceKind::King))
}

#[test]
fn pick_up_then_drop_in_place_is_a_no_op() {
    let mut midgame = GameState::new_game();
    commit(&mut midgame, "e2", "e4");
    commit(&mut midgame, "d7", "d5");

    for start in [GameState::new_game(), midgame] {
        for square in Square::all() {
            let mut game = start.clone();
            pick_up(&mut game, Some(square));
            drop_piece(&mut game, Some(square));
            assert_eq!(game.board, start.board, "board changed at {square}");
            assert_eq!(game.side_to_move, start.side_to_move);
            assert_eq!(game, start);
        }
    }
}

#[test]
fn every_rejected_drop_restores_the_position() {
    let start = GameState::new_game();
    let own: Vec<Square> = start
        .board
        .occupied_squares()
        .filter(|(_, piece)| piece.side == Side::White)
        .map(|(square, _)| square)
        .collect();

    let mut legal = 0;
    for from in own {
        for to in Square::all() {
            let mut game = start.clone();
            pick_up(&mut game, Some(from));
            match drop_piece(&mut game, Some(to)) {
                DropOutcome::Rejected(_) => assert_eq!(game, start, "{from}-{to} left traces"),
                DropOutcome::Committed(_) => legal += 1,
                other => panic!("unexpected {other:?} for {from}-{to}"),
            }
        }
    }
    assert_eq!(legal, 20);
}

#[test]
fn en_passant_window_lasts_one_reply() {
    let mut game = GameState::new_game();
    commit(&mut game, "e2", "e4");
    assert_eq!(game.en_passant.countdown(), 2);
    assert_eq!(game.en_passant.file(), Some(5));

    commit(&mut game, "g8", "f6");
    assert_eq!(game.en_passant.countdown(), 1);

    commit(&mut game, "b1", "c3");
    assert_eq!(game.en_passant.countdown(), 0);
    assert_eq!(game.en_passant.file(), None);
}

#[test]
fn en_passant_capture_only_on_the_immediate_reply() {
    let mut game = GameState::new_game();
    commit(&mut game, "e2", "e4");
    commit(&mut game, "a7", "a6");
    commit(&mut game, "e4", "e5");
    commit(&mut game, "d7", "d5");

    let mut capture = game.clone();
    let outcome = play(&mut capture, "e5", "d6");
    assert!(matches!(outcome, DropOutcome::Committed(mv) if mv.en_passant_victim() == Some(sq("d5"))));
    assert_eq!(capture.piece_at(sq("d5")), None);
    assert_eq!(
        capture.piece_at(sq("d6")),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );

    // Wrong file is never allowed.
    let mut wrong_file = game.clone();
    assert_eq!(
        play(&mut wrong_file, "e5", "f6"),
        DropOutcome::Rejected(RejectReason::IllegalMove)
    );

    // Let the moment pass.
    commit(&mut game, "g1", "f3");
    commit(&mut game, "g8", "f6");
    let before = game.clone();
    assert_eq!(
        play(&mut game, "e5", "d6"),
        DropOutcome::Rejected(RejectReason::IllegalMove)
    );
    assert_eq!(game, before);
}

#[test]
fn short_castle_relocates_rook_and_clears_rights() {
    let mut game = GameState::from_board(castling_board(), Side::White).expect("kings present");
    assert_eq!(game.king(Side::White).rights, CastlingRights::BOTH);

    commit(&mut game, "e1", "g1");
    assert_eq!(
        game.piece_at(sq("g1")),
        Some(Piece::new(Side::White, PieceKind::King))
    );
    assert_eq!(
        game.piece_at(sq("f1")),
        Some(Piece::new(Side::White, PieceKind::Rook))
    );
    assert_eq!(game.piece_at(sq("h1")), None);
    assert_eq!(game.king(Side::White).square, sq("g1"));
    assert_eq!(game.king(Side::White).rights, CastlingRights::NONE);
    assert_eq!(game.side_to_move, Side::Black);
}

#[test]
fn long_castle_ignores_attacks_on_the_knight_square() {
    let board = castling_board().with_piece(sq("b5"), Piece::new(Side::Black, PieceKind::Rook));
    let mut game = GameState::from_board(board, Side::White).expect("kings present");
    commit(&mut game, "e1", "c1");
    assert_eq!(
        game.piece_at(sq("d1")),
        Some(Piece::new(Side::White, PieceKind::Rook))
    );
}

#[test]
fn castling_refused_through_check_or_blockers() {
    let attacker = Piece::new(Side::Black, PieceKind::Rook);
    let refusals = [
        ("e5", "g1"), // king attacked
        ("f5", "g1"), // passes through attack
        ("g5", "g1"), // lands on attack
        ("d5", "c1"), // long side transit
        ("c5", "c1"),
    ];
    for (attacker_square, target) in refusals {
        let board = castling_board().with_piece(sq(attacker_square), attacker);
        let mut game = GameState::from_board(board, Side::White).expect("kings present");
        let before = game.clone();
        assert!(
            matches!(play(&mut game, "e1", target), DropOutcome::Rejected(_)),
            "castle to {target} with rook on {attacker_square}"
        );
        assert_eq!(game, before);
    }

    let board = castling_board().with_piece(sq("b1"), Piece::new(Side::White, PieceKind::Knight));
    let mut game = GameState::from_board(board, Side::White).expect("kings present");
    assert_eq!(
        play(&mut game, "e1", "c1"),
        DropOutcome::Rejected(RejectReason::IllegalMove)
    );
    commit(&mut game, "e1", "g1");
}

#[test]
fn castling_right_lost_after_rook_moves_and_returns() {
    let mut game = GameState::from_board(castling_board(), Side::White).expect("kings present");
    commit(&mut game, "h1", "h2");
    commit(&mut game, "h8", "g7");
    commit(&mut game, "h2", "h1");
    commit(&mut game, "g7", "g6");
    assert!(!game.king(Side::White).rights.short);
    assert!(game.king(Side::White).rights.long);
    assert_eq!(
        play(&mut game, "e1", "g1"),
        DropOutcome::Rejected(RejectReason::IllegalMove)
    );
}

#[test]
fn knight_taking_a_corner_rook_ends_that_castling_right() {
    let board = Board::empty()
        .with_piece(sq("e1"), Piece::new(Side::White, PieceKind::King))
        .with_piece(sq("g6"), Piece::new(Side::White, PieceKind::Knight))
        .with_piece(sq("e8"), Piece::new(Side::Black, PieceKind::King))
        .with_piece(sq("h8"), Piece::new(Side::Black, PieceKind::Rook))
        .with_piece(sq("h4"), Piece::new(Side::Black, PieceKind::Rook));
    let mut game = GameState::from_board(board, Side::White).expect("kings present");
    assert!(game.king(Side::Black).rights.short);

    let outcome = play(&mut game, "g6", "h8");
    assert!(matches!(outcome, DropOutcome::Committed(mv) if mv.has(FLAG_CAPTURE)));
    assert!(!game.king(Side::Black).rights.short);

    // Another rook reaching the corner does not bring the right back.
    commit(&mut game, "h4", "h8");
    commit(&mut game, "e1", "d1");
    let before = game.clone();
    assert_eq!(
        play(&mut game, "e8", "g8"),
        DropOutcome::Rejected(RejectReason::IllegalMove)
    );
    assert_eq!(game, before);
}

#[test]
fn promotion_blocks_pick_up_until_resolved() {
    let board = Board::empty()
        .with_piece(sq("a1"), Piece::new(Side::White, PieceKind::King))
        .with_piece(sq("g7"), Piece::new(Side::White, PieceKind::Pawn))
        .with_piece(sq("h8"), Piece::new(Side::Black, PieceKind::Rook))
        .with_piece(sq("c8"), Piece::new(Side::Black, PieceKind::King));
    let mut game = GameState::from_board(board, Side::White).expect("kings present");

    // Capture onto the last rank also promotes.
    assert_eq!(
        play(&mut game, "g7", "h8"),
        DropOutcome::AwaitingPromotion(sq("h8"))
    );
    assert!(game.is_awaiting_promotion());
    for square in ["a1", "c8", "h8"] {
        assert_eq!(
            pick_up(&mut game, Some(sq(square))),
            PickUpOutcome::Ignored(IgnoreReason::AwaitingPromotion)
        );
    }

    let promoted = resolve_promotion(&mut game, PromotionKind::Rook);
    assert_eq!(promoted, Some(Piece::new(Side::White, PieceKind::Rook)));
    assert_eq!(game.side_to_move, Side::Black);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert!(is_in_check(&mut game, Side::Black));
}

#[test]
fn self_check_rejection_reverts_castling_side_effects() {
    // King in check from b4; stepping along the bishop's diagonal is refused
    // and must not cost any right.
    let board = castling_board().with_piece(sq("b4"), Piece::new(Side::Black, PieceKind::Bishop));
    let mut game = GameState::from_board(board, Side::White).expect("kings present");
    let before = game.clone();

    assert_eq!(
        play(&mut game, "e1", "d2"),
        DropOutcome::Rejected(RejectReason::SelfCheck)
    );
    assert_eq!(game, before);
    assert_eq!(game.king(Side::White).rights, CastlingRights::BOTH);
}

#[test]
fn random_pointer_streams_never_corrupt_rejections() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut game = GameState::new_game();

    for _ in 0..3_000 {
        if game.is_awaiting_promotion() {
            resolve_promotion(&mut game, PromotionKind::Queen);
            continue;
        }
        let before = game.clone();
        let from = Square::from_index(rng.random_range(0..64));
        let to = if rng.random_ratio(1, 20) {
            None
        } else {
            Square::from_index(rng.random_range(0..64))
        };

        if !matches!(pick_up(&mut game, from), PickUpOutcome::Lifted(_)) {
            assert_eq!(game, before);
            continue;
        }
        match drop_piece(&mut game, to) {
            DropOutcome::Rejected(_) => assert_eq!(game, before),
            DropOutcome::Committed(_) => assert_ne!(game.side_to_move, before.side_to_move),
            DropOutcome::AwaitingPromotion(_) => {
                assert_eq!(game.side_to_move, before.side_to_move)
            }
            DropOutcome::NothingSelected => panic!("a piece was lifted"),
        }
        assert!(game.king(Side::White).rights.is_subset_of(before.king(Side::White).rights));
        assert!(game.king(Side::Black).rights.is_subset_of(before.king(Side::Black).rights));
        assert!(!game.is_scanning());
    }
}
