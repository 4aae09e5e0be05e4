use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use drop_chess::chess_errors::{ChessErrors, ChessResult};
use drop_chess::game_state::chess_types::{PromotionKind, Square};
use drop_chess::game_state::game_state::GameState;
use drop_chess::input::pointer_mapping::square_from_pixels;
use drop_chess::move_validation::attack_scan::is_in_check;
use drop_chess::settings::Settings;
use drop_chess::turn::promotion::resolve_promotion;
use drop_chess::turn::turn_controller::{drop_piece, pick_up, DropOutcome, PickUpOutcome};
use drop_chess::utils::algebraic::pointer_square;
use drop_chess::utils::render_board::render_board;

const HELP: &str = "\
commands:
  press <sq|off>        lift the piece on a square
  release <sq|off>      drop the lifted piece
  move <from> <to>      press then release
  click <x> <y>         press at window pixel coordinates
  release-at <x> <y>    release at window pixel coordinates
  promote <q|r|n|b>     choose the promotion piece
  flip                  toggle the mirrored view
  show                  print the board
  help                  this text
  quit                  leave";

/// Whether the read loop should keep going after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented stand-in for the windowed front end: every command becomes
/// one press, release or promotion event fed to the engine.
struct Driver {
    game: GameState,
    settings: Settings,
}

impl Driver {
    fn new(settings: Settings) -> Self {
        Self {
            game: GameState::new_game(),
            settings,
        }
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> ChessResult<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let unknown = || ChessErrors::UnknownCommand(line.trim().to_owned());

        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return Ok(Flow::Quit),
            ["help"] => self.say(out, HELP),
            ["show"] => self.show(out),
            ["flip"] => {
                self.settings.mirrored = !self.settings.mirrored;
                self.show(out);
            }
            ["press", square] => {
                let square = pointer_square(square)?;
                self.press(out, square);
            }
            ["release", square] => {
                let square = pointer_square(square)?;
                self.release(out, square);
            }
            ["move", from, to] => {
                let from = pointer_square(from)?;
                let to = pointer_square(to)?;
                if self.press(out, from) {
                    self.release(out, to);
                }
            }
            ["click", x, y] => {
                let square = self.pixel_square(x, y)?;
                self.press(out, square);
            }
            ["release-at", x, y] => {
                let square = self.pixel_square(x, y)?;
                self.release(out, square);
            }
            ["promote", choice] => {
                let mut chars = choice.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(unknown());
                };
                let kind = PromotionKind::from_char(c)?;
                match resolve_promotion(&mut self.game, kind) {
                    Some(piece) => {
                        self.say(out, &format!("promoted to {piece:?}"));
                        self.show(out);
                    }
                    None => self.say(out, "no promotion pending"),
                }
            }
            _ => return Err(unknown()),
        }
        Ok(Flow::Continue)
    }

    fn pixel_square(&self, x: &str, y: &str) -> ChessResult<Option<Square>> {
        let parse = |text: &str| {
            text.parse::<f64>()
                .map_err(|_| ChessErrors::UnknownCommand(format!("bad coordinate {text:?}")))
        };
        let (px, py) = (parse(x)?, parse(y)?);
        Ok(square_from_pixels(
            &self.settings.viewport,
            px,
            py,
            self.settings.mirrored,
        ))
    }

    /// Returns true when a piece was lifted.
    fn press(&mut self, out: &mut impl Write, square: Option<Square>) -> bool {
        match pick_up(&mut self.game, square) {
            PickUpOutcome::Lifted(selected) => {
                self.say(
                    out,
                    &format!("holding {:?} from {}", selected.piece, selected.from),
                );
                true
            }
            PickUpOutcome::Ignored(reason) => {
                self.say(out, &format!("press ignored: {reason:?}"));
                false
            }
        }
    }

    fn release(&mut self, out: &mut impl Write, square: Option<Square>) {
        match drop_piece(&mut self.game, square) {
            DropOutcome::NothingSelected => self.say(out, "nothing to release"),
            DropOutcome::Rejected(reason) => self.say(out, &format!("rejected: {reason:?}")),
            DropOutcome::Committed(mv) => {
                self.say(out, &format!("{} -> {}", mv.from, mv.to));
                self.show(out);
                let side = self.game.side_to_move;
                if is_in_check(&mut self.game, side) {
                    self.say(out, &format!("{side:?} is in check"));
                }
            }
            DropOutcome::AwaitingPromotion(square) => {
                self.say(out, &format!("pawn on {square}: promote <q|r|n|b>"));
            }
        }
    }

    fn show(&self, out: &mut impl Write) {
        let board = render_board(&self.game, self.settings.mirrored);
        self.say(out, &board);
    }

    fn say(&self, out: &mut impl Write, text: &str) {
        if writeln!(out, "{text}").is_err() {
            debug!("stdout closed");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let settings = match Settings::from_env().and_then(|s| s.apply_args(&args)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    let mut driver = Driver::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.show(&mut out);
    driver.say(&mut out, "type 'help' for commands");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match driver.execute(&line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!(%e, "command failed");
                driver.say(&mut out, &e.to_string());
            }
        }
        out.flush().ok();
    }
}
