//! Parsing of interactive player input.

use holdem_engine::player::PlayerAction;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered q or quit
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or the quit command.
///
/// Accepted, case-insensitive: `check`/`k`, `call`/`c`, `fold`/`f`,
/// `raise N`/`r N` (N is the total to raise to), `allin`/`all-in`, and
/// `q`/`quit`.
///
/// ```rust
/// use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("raise 80"), ParseResult::Action(PlayerAction::Raise(80)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        // the engine clamps any raise beyond the stack to an all-in
        "allin" | "all-in" => ParseResult::Action(PlayerAction::Raise(u32::MAX)),
        "raise" | "r" => match parts.get(1).map(|a| a.parse::<u32>()) {
            None => ParseResult::Invalid("Raise requires an amount (e.g., 'raise 80')".to_string()),
            Some(Ok(amount)) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, raise <amount>, fold, allin, q",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forms_are_accepted() {
        assert_eq!(parse_player_action("k"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("c"), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action(" F "), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("r 60"), ParseResult::Action(PlayerAction::Raise(60)));
    }

    #[test]
    fn all_in_is_an_unbounded_raise() {
        assert_eq!(
            parse_player_action("all-in"),
            ParseResult::Action(PlayerAction::Raise(u32::MAX))
        );
    }

    #[test]
    fn bad_amounts_are_reported() {
        assert!(matches!(parse_player_action("raise"), ParseResult::Invalid(m) if m.contains("amount")));
        assert!(matches!(parse_player_action("raise 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise lots"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action(""), ParseResult::Invalid(_)));
    }
}
