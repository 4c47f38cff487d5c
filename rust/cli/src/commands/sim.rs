//! Simulation command handler.
//!
//! Runs bot-only hands with no table display. Each finished hand prints
//! either a one-line summary or, with `--json`, its full outcome as one JSON
//! object per line.
//!
//! # Examples
//!
//! ```no_run
//! let code = holdem_cli::run(
//!     ["holdem", "sim", "--hands", "100", "--seed", "42", "--json"],
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use holdem_engine::snapshot::NullSink;
use holdem_engine::source::SeatedSources;
use holdem_engine::wallet::LedgerWallet;
use tracing::info;

use super::table;
use crate::error::CliError;
use crate::formatters::format_outcome;

/// Handle the sim command.
///
/// Stops early when one player holds every chip.
pub fn handle_sim_command(
    players: u8,
    hands: u32,
    seed: Option<u64>,
    bot: &str,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    table::require_hands(hands)?;
    let (mut engine, seed) = table::build_engine(players, false, seed)?;
    let mut bots = SeatedSources::new(table::bot_seats(bot, players, seed)?);
    let mut wallet = LedgerWallet::new();
    table::report_wallet_warnings(err, &engine.seat_players(&mut wallet))?;

    if !json {
        let blinds = engine.config();
        writeln!(
            out,
            "sim: players={} hands={} seed={} bot={} blinds={}/{}",
            players, hands, seed, bot, blinds.small_blind, blinds.big_blind
        )?;
    }

    let mut played = 0u32;
    while played < hands && !engine.is_over() {
        let outcome = engine.play_hand(&mut bots, &mut NullSink, &mut wallet)?;
        played += 1;
        if json {
            let line = outcome.to_json().map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", format_outcome(&outcome))?;
        }
        table::report_wallet_warnings(err, &outcome.wallet_warnings)?;
    }

    info!(played, over = engine.is_over(), "simulation finished");
    if !json {
        writeln!(out, "Hands played: {}", engine.hands_played())?;
        for p in engine.players() {
            writeln!(out, "  {} ({}): {}", p.name(), p.id(), p.stack())?;
        }
        if let Some(winner) = engine.winner().filter(|_| engine.is_over()) {
            writeln!(out, "Winner: {}", winner)?;
        }
    }
    Ok(())
}
