//! Eval command handler: ranks a hand from text.

use std::io::Write;

use holdem_engine::cards::{HoleCards, parse_cards};
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

/// Handle the eval command.
///
/// `hole` must name exactly two cards and `board` at most five, with no card
/// appearing twice across both.
pub fn handle_eval_command(hole: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole)?;
    let [a, b] = hole_cards[..] else {
        return Err(CliError::InvalidInput(format!(
            "hole must be exactly 2 cards, got {}",
            hole_cards.len()
        )));
    };
    let board_cards = parse_cards(board)?;
    if board_cards.len() > 5 {
        return Err(CliError::InvalidInput(format!(
            "board holds at most 5 cards, got {}",
            board_cards.len()
        )));
    }
    if let Some(dup) = board_cards.iter().find(|c| **c == a || **c == b) {
        return Err(CliError::InvalidInput(format!(
            "card {} is both in the hole and on the board",
            dup
        )));
    }

    let hole = HoleCards([a, b]);
    let rank = evaluate(&hole, &board_cards);
    writeln!(
        out,
        "Hole: {}  Board: {}",
        format_cards(&hole.cards()),
        format_board(&board_cards)
    )?;
    writeln!(out, "Rank: {}", rank)?;
    writeln!(out, "Category: {}", rank.category.value())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(hole: &str, board: &str) -> Result<String, CliError> {
        let mut out: Vec<u8> = Vec::new();
        handle_eval_command(hole, board, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn quads_with_king_kicker() {
        let text = eval("As Ah", "Ad Ac Ks 2h 3d").unwrap();
        assert!(text.contains("Rank: Four of a Kind (A, K)"), "{}", text);
        assert!(text.contains("Category: 8"));
    }

    #[test]
    fn hole_cards_alone_rank() {
        let text = eval("7c 7d", "").unwrap();
        assert!(text.contains("Rank: One Pair (7)"), "{}", text);
    }

    #[test]
    fn wrong_hole_count_is_invalid() {
        assert!(matches!(eval("As", ""), Err(CliError::InvalidInput(_))));
        assert!(matches!(eval("As Ks Qs", ""), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn shared_card_is_invalid() {
        assert!(matches!(eval("As Kd", "As 2c 3c"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn garbage_card_is_invalid() {
        assert!(matches!(eval("Xs Kd", ""), Err(CliError::InvalidInput(_))));
    }
}
