//! Table setup shared by `play` and `sim`.

use std::io::Write;

use holdem_ai::{BOT_TYPES, create_ai};
use holdem_engine::engine::Engine;
use holdem_engine::history::WalletWarning;
use holdem_engine::source::ActionSource;
use tracing::debug;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Seat 0 when a human is playing.
pub const HUMAN_SEAT: usize = 0;

/// Resolves configuration and the session seed, then seats `players`.
pub fn build_engine(
    players: u8,
    human: bool,
    seed: Option<u64>,
) -> Result<(Engine, u64), CliError> {
    let resolved = config::load_with_sources()?.with_cli_seed(seed);
    let seed = resolved.config.seed.unwrap_or_else(rand::random);
    debug!(sources = ?resolved.sources, seed, players, human, "table configured");
    let names = seat_names(players, human);
    let engine = Engine::new(resolved.config.table_config(), &names)?.with_seed(seed);
    Ok((engine, seed))
}

pub fn seat_names(players: u8, human: bool) -> Vec<String> {
    (0..players as usize)
        .map(|seat| {
            if human && seat == HUMAN_SEAT {
                "You".to_string()
            } else {
                format!("Bot {}", seat)
            }
        })
        .collect()
}

/// One bot per seat. Each seat's randomness is derived from the session
/// seed so a seeded session replays exactly.
pub fn bot_seats(bot: &str, players: u8, seed: u64) -> Result<Vec<Box<dyn ActionSource>>, CliError> {
    (0..players as u64)
        .map(|seat| {
            let seat_seed = seed ^ (seat + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            create_ai(bot, seat_seed).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "unknown bot type '{}' (expected one of: {})",
                    bot,
                    BOT_TYPES.join(", ")
                ))
            })
        })
        .collect()
}

pub fn report_wallet_warnings(
    err: &mut dyn Write,
    warnings: &[WalletWarning],
) -> Result<(), CliError> {
    for w in warnings {
        ui::display_warning(err, &format!("wallet: {}: {}", w.player, w.message))?;
    }
    Ok(())
}

pub fn require_hands(hands: u32) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    Ok(())
}
