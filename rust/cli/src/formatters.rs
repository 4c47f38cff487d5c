//! Card, board, and outcome formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is known to cope with
//! Unicode, and as h d c s otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::history::HandOutcome;
use holdem_engine::player::ActionKind;

/// On Windows only modern terminals (Windows Terminal, VS Code and the
/// like) are trusted with suit symbols; elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> char {
    if supports_unicode() {
        suit.symbol()
    } else {
        suit.letter()
    }
}

/// "A♠" or "As"; tens are written "10".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Bracketed card list, "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

pub fn format_legal(legal: &[ActionKind], to_call: u32, min_raise: u32) -> String {
    legal
        .iter()
        .map(|kind| match kind {
            ActionKind::Check => "check".to_string(),
            ActionKind::Call => format!("call {}", to_call),
            ActionKind::Raise => format!("raise <to, min {}>", min_raise),
            ActionKind::Fold => "fold".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// One-line hand result used by `sim` and at the end of every `play` hand.
pub fn format_outcome(outcome: &HandOutcome) -> String {
    let payouts: Vec<String> = outcome
        .payouts
        .iter()
        .map(|(id, chips)| format!("seat {} +{}", id.0, chips))
        .collect();
    let mut line = format!(
        "Hand {}: pot {} board {} -> {}",
        outcome.hand_number,
        outcome.pot,
        format_board(&outcome.board),
        payouts.join(", ")
    );
    if let Some(best) = outcome
        .showdown
        .iter()
        .find(|e| outcome.winners.first() == Some(&e.player))
    {
        line.push_str(&format!(" ({})", best.rank));
    }
    line
}
