//! Deal command handler for single hand dealing and display.
//!
//! Deals hole cards to every seat and runs the board out face up, burning
//! before each street the way a live dealer does. The same seed always
//! produces the same hand.

use std::io::Write;

use holdem_engine::cards::HoleCards;
use holdem_engine::deck::Deck;
use holdem_engine::hand::evaluate;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `players` - Seats to deal in (2-8)
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    players: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?.with_cli_seed(seed);
    let seed = resolved.config.seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);

    let seats = players as usize;
    let mut first = Vec::with_capacity(seats);
    for _ in 0..seats {
        first.push(deck.draw()?);
    }
    let mut holes = Vec::with_capacity(seats);
    for card in first {
        holes.push(HoleCards([card, deck.draw()?]));
    }

    let mut board = Vec::with_capacity(5);
    for n in [3, 1, 1] {
        deck.burn()?;
        board.extend(deck.draw_n(n)?);
    }

    writeln!(out, "deal: seed={} players={}", seed, players)?;
    for (seat, hole) in holes.iter().enumerate() {
        writeln!(
            out,
            "Seat {}: {} -> {}",
            seat,
            format_cards(&hole.cards()),
            evaluate(hole, &board)
        )?;
    }
    writeln!(out, "Board: {}", format_board(&board))?;
    Ok(())
}
