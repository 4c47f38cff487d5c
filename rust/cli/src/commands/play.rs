//! # Play Command
//!
//! Plays hands at a table of bots. With `--human`, seat 0 reads its actions
//! from stdin: `check`, `call`, `raise N`, `allin`, `fold`, or `q` to leave.
//!
//! Quitting folds the human for the rest of the current hand and ends the
//! session once it settles. Closing stdin mid-session does the same but is
//! reported as an interruption.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction;
use holdem_engine::source::{ActionRequest, ActionSource, SeatedSources};
use holdem_engine::wallet::LedgerWallet;
use tracing::info;

use super::table::{self, HUMAN_SEAT};
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_legal, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui::{self, SharedOut, TerminalSink, with_shared};
use crate::validation::{ParseResult, parse_player_action};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Playing,
    Quit,
    InputClosed,
}

/// Routes the human's seat to stdin and every other seat to its bot.
struct PlayTable<'s, 'i, 'o, 'e> {
    human: bool,
    bots: SeatedSources,
    input: &'i mut dyn BufRead,
    out: &'s SharedOut<'o>,
    err: &'s SharedOut<'e>,
    session: Session,
}

impl PlayTable<'_, '_, '_, '_> {
    fn is_human(&self, request: &ActionRequest) -> bool {
        self.human && request.player.0 == HUMAN_SEAT
    }

    fn prompt(&self, request: &ActionRequest) {
        with_shared(self.out, |out| {
            let hole = request
                .hole
                .map(|h| format_cards(&h.cards()))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "Your turn ({:?}): hole {} board {} | pot {} | to call {} | stack {}",
                request.street,
                hole,
                format_board(&request.board),
                request.pot,
                request.to_call,
                request.stack
            );
            let _ = write!(
                out,
                "Options: {} (q to quit)\n> ",
                format_legal(&request.legal, request.to_call, request.min_raise)
            );
            let _ = out.flush();
        });
    }

    fn read_human_action(&mut self, request: &ActionRequest) -> PlayerAction {
        loop {
            self.prompt(request);
            let Some(line) = read_stdin_line(self.input) else {
                self.session = Session::InputClosed;
                return PlayerAction::Fold;
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return action,
                ParseResult::Quit => {
                    self.session = Session::Quit;
                    return PlayerAction::Fold;
                }
                ParseResult::Invalid(msg) => {
                    with_shared(self.err, |err| ui::write_error(err, &msg)).ok();
                }
            }
        }
    }
}

impl ActionSource for PlayTable<'_, '_, '_, '_> {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        if !self.is_human(request) {
            return self.bots.request_action(request);
        }
        if self.session != Session::Playing {
            // sitting out the rest of the hand
            return PlayerAction::Fold;
        }
        self.read_human_action(request)
    }

    fn on_rejected(&mut self, request: &ActionRequest, error: &GameError) {
        if self.is_human(request) {
            with_shared(self.err, |err| {
                ui::write_error(err, &format!("Invalid action: {}", error))
            })
            .ok();
        } else {
            self.bots.on_rejected(request, error);
        }
    }
}

/// Handle the play command.
///
/// # Arguments
///
/// * `players` - Seats at the table (2-8)
/// * `hands` - Hands to play unless one player wins everything first
/// * `seed` - Session seed; overrides `HOLDEM_SEED` and the config file
/// * `human` - Seat a human at seat 0
/// * `bot` - Bot type for the other seats
/// * `stdin` - The human's input
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands or an unknown bot type,
/// `CliError::Interrupted` when stdin closes while the human is seated.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    players: u8,
    hands: u32,
    seed: Option<u64>,
    human: bool,
    bot: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    table::require_hands(hands)?;
    let (mut engine, seed) = table::build_engine(players, human, seed)?;
    let bots = SeatedSources::new(table::bot_seats(bot, players, seed)?);

    writeln!(
        out,
        "play: players={} hands={} seed={} human={} bot={}",
        players, hands, seed, human, bot
    )?;

    let mut wallet = LedgerWallet::new();
    table::report_wallet_warnings(err, &engine.seat_players(&mut wallet))?;

    let out = RefCell::new(out);
    let err = RefCell::new(err);
    let mut seats = PlayTable {
        human,
        bots,
        input: stdin,
        out: &out,
        err: &err,
        session: Session::Playing,
    };

    let mut played = 0u32;
    while played < hands && !engine.is_over() {
        let outcome = {
            let mut sink = TerminalSink::new(&out);
            engine.play_hand(&mut seats, &mut sink, &mut wallet)?
        };
        played += 1;
        with_shared(&out, |o| writeln!(o, "{}", format_outcome(&outcome)))?;
        with_shared(&err, |e| table::report_wallet_warnings(e, &outcome.wallet_warnings))?;

        match seats.session {
            Session::Playing => {}
            Session::Quit => {
                info!(played, "player left the table");
                break;
            }
            Session::InputClosed => {
                return Err(CliError::Interrupted(format!(
                    "input closed after {} hand(s)",
                    played
                )));
            }
        }
    }

    with_shared(&out, |o| -> std::io::Result<()> {
        if let Some(winner) = engine.winner().filter(|_| engine.is_over()) {
            let name = engine
                .state()
                .player(winner)
                .map(|p| p.name().to_string())
                .unwrap_or_default();
            writeln!(o, "Winner: {} ({})", name, winner)?;
        }
        writeln!(o, "Hands played: {}", engine.hands_played())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(human: bool, hands: u32, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            2, hands, Some(7), human, "calling", &mut out, &mut err, &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn bot_session_plays_requested_hands() {
        let (result, out, _) = play(false, 3, "");
        assert!(result.is_ok());
        assert!(out.contains("play: players=2 hands=3 seed=7"));
        assert!(out.contains("Hands played: 3"));
    }

    #[test]
    fn quit_ends_session_cleanly() {
        let (result, out, _) = play(true, 5, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Your turn"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn closed_input_is_an_interruption() {
        let (result, _, _) = play(true, 5, "");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn unparseable_input_reprompts() {
        let (result, _, err) = play(true, 1, "dance\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'dance'"));
    }

    #[test]
    fn zero_hands_error() {
        let (result, _, _) = play(false, 0, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
