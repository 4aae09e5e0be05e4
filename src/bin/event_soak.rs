//! Randomized pointer-event soak runner.
//!
//! Feeds a seeded stream of press, release and promotion events into one
//! game and checks the state invariants after every event.
//!
//! Usage:
//! `cargo run --release --bin event_soak`
//! `cargo run --release --bin event_soak -- --events 200000 --seed 7`

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use drop_chess::game_state::chess_types::{PieceKind, PromotionKind, Side, Square};
use drop_chess::game_state::game_state::GameState;
use drop_chess::game_state::king_state::CastlingRights;
use drop_chess::settings::Settings;
use drop_chess::turn::promotion::resolve_promotion;
use drop_chess::turn::turn_controller::{drop_piece, pick_up, DropOutcome, TurnPhase};

/// Restart after this many events without a committed move (mate, stalemate
/// or just an unlucky stream).
const STALL_LIMIT: u64 = 2_000;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

#[derive(Default)]
struct SoakStats {
    presses: u64,
    releases: u64,
    commits: u64,
    rejections: u64,
    promotions: u64,
    castles: u64,
    en_passant: u64,
    restarts: u64,
}

enum Event {
    Press(Option<Square>),
    Release(Option<Square>),
    Promote(PromotionKind),
}

fn random_square(rng: &mut StdRng) -> Option<Square> {
    if rng.random_ratio(1, 16) {
        None
    } else {
        Square::from_index(rng.random_range(0..64))
    }
}

fn next_event(game: &GameState, rng: &mut StdRng) -> Event {
    match game.phase() {
        TurnPhase::AwaitingPromotion => {
            let kinds = [
                PromotionKind::Queen,
                PromotionKind::Rook,
                PromotionKind::Knight,
                PromotionKind::Bishop,
            ];
            let kind = kinds.choose(rng).copied().unwrap_or(PromotionKind::Queen);
            if rng.random_ratio(1, 8) {
                // Stray press while the prompt is up.
                Event::Press(random_square(rng))
            } else {
                Event::Promote(kind)
            }
        }
        TurnPhase::Selected => {
            if rng.random_ratio(1, 10) {
                Event::Press(random_square(rng))
            } else {
                Event::Release(random_square(rng))
            }
        }
        TurnPhase::Idle => {
            let own: Vec<Square> = game
                .board
                .occupied_squares()
                .filter(|(_, piece)| piece.side == game.side_to_move)
                .map(|(square, _)| square)
                .collect();
            if rng.random_bool(0.8) {
                Event::Press(own.choose(rng).copied())
            } else if rng.random_ratio(1, 4) {
                Event::Release(random_square(rng))
            } else {
                Event::Press(random_square(rng))
            }
        }
    }
}

/// Check everything that must hold between events. `before` is the state
/// prior to the event, `toggled_ok` says whether the event was allowed to
/// hand the move over.
fn check_invariants(before: &GameState, after: &GameState, toggled_ok: bool) -> Result<(), String> {
    for side in [Side::White, Side::Black] {
        let on_board: Vec<Square> = after
            .board
            .occupied_squares()
            .filter(|(_, piece)| piece.side == side && piece.kind == PieceKind::King)
            .map(|(square, _)| square)
            .collect();
        let lifted = after
            .selected()
            .filter(|selected| selected.piece.side == side && selected.piece.kind == PieceKind::King)
            .map(|selected| selected.from);
        let king_square = after.king(side).square;

        match (on_board.as_slice(), lifted) {
            ([square], None) if *square == king_square => {}
            ([], Some(from)) if from == king_square => {}
            _ => {
                return Err(format!(
                    "{side:?} king bookkeeping broken: board {on_board:?}, lifted {lifted:?}, recorded {king_square}"
                ))
            }
        }

        let was: CastlingRights = before.king(side).rights;
        let now: CastlingRights = after.king(side).rights;
        if !now.is_subset_of(was) {
            return Err(format!("{side:?} castling rights grew: {was:?} -> {now:?}"));
        }
    }

    if before.side_to_move != after.side_to_move && !toggled_ok {
        return Err("side to move changed without a commit".to_owned());
    }

    for (square, piece) in after.board.occupied_squares() {
        let last_rank = square.rank() == 1 || square.rank() == 8;
        if piece.kind == PieceKind::Pawn
            && last_rank
            && after.pending_promotion() != Some(square)
        {
            return Err(format!("unpromoted pawn left on {square}"));
        }
    }

    if after.is_scanning() {
        return Err("scanning flag left raised".to_owned());
    }
    Ok(())
}

fn run(events: u64, seed: u64) -> Result<SoakStats, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new_game();
    let mut stats = SoakStats::default();
    let mut since_commit = 0_u64;

    for n in 0..events {
        let before = game.clone();
        let toggled_ok = match next_event(&game, &mut rng) {
            Event::Press(square) => {
                stats.presses += 1;
                pick_up(&mut game, square);
                false
            }
            Event::Release(square) => {
                stats.releases += 1;
                match drop_piece(&mut game, square) {
                    DropOutcome::Committed(mv) => {
                        stats.commits += 1;
                        stats.castles += u64::from(mv.castling_wing().is_some());
                        stats.en_passant += u64::from(mv.en_passant_victim().is_some());
                        since_commit = 0;
                        true
                    }
                    DropOutcome::AwaitingPromotion(_) => {
                        stats.commits += 1;
                        since_commit = 0;
                        false
                    }
                    DropOutcome::Rejected(_) => {
                        stats.rejections += 1;
                        false
                    }
                    DropOutcome::NothingSelected => false,
                }
            }
            Event::Promote(kind) => {
                let resolved = resolve_promotion(&mut game, kind).is_some();
                stats.promotions += u64::from(resolved);
                resolved
            }
        };

        check_invariants(&before, &game, toggled_ok)
            .map_err(|msg| format!("event {n} (seed {seed}): {msg}"))?;

        since_commit += 1;
        if since_commit > STALL_LIMIT && game.phase() == TurnPhase::Idle {
            stats.restarts += 1;
            since_commit = 0;
            game = GameState::new_game();
        }
    }
    Ok(stats)
}

fn main() -> Result<(), String> {
    let settings = Settings::from_env().map_err(|e| e.to_string())?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let events = parse_arg_u64("--events", 100_000);
    let seed = parse_arg_u64("--seed", 1);
    info!(events, seed, "soak starting");

    let stats = run(events, seed).inspect_err(|msg| warn!(%msg, "invariant violated"))?;

    println!("events      : {events}");
    println!("presses     : {}", stats.presses);
    println!("releases    : {}", stats.releases);
    println!("commits     : {}", stats.commits);
    println!("rejections  : {}", stats.rejections);
    println!("promotions  : {}", stats.promotions);
    println!("castles     : {}", stats.castles);
    println!("en passant  : {}", stats.en_passant);
    println!("restarts    : {}", stats.restarts);
    Ok(())
}
