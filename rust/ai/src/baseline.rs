//! Rule-based bot used for simulations and as the default opponent.
//!
//! Decisions are a pure function of the request: hand strength on a 0-10
//! scale, pot odds and the raise limits the engine offers.

use holdem_engine::cards::{Card, HoleCards};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::history::Street;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::source::{ActionRequest, ActionSource};

/// Tight, deterministic strategy.
///
/// **Preflop:** premium pairs and big aces raise, playable hands call when
/// the price is small, everything else checks or folds.
///
/// **Postflop:** two pair or better bets for value, one pair calls small
/// bets, weaker hands give up unless the pot odds are generous.
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineBot;
///
/// let bot = BaselineBot::new();
/// assert_eq!(bot.name(), "baseline");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &str {
        "baseline"
    }

    /// Preflop hand strength, 0-10.
    ///
    /// - 9-10: AA-JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, KQ, suited broadway
    /// - 3-4: small pairs, weak aces, suited connectors
    /// - 0-2: everything else
    pub(crate) fn preflop_strength(hole: HoleCards) -> u8 {
        let [c1, c2] = hole.cards();
        let (r1, r2) = (c1.rank.value(), c2.rank.value());
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Made-hand strength once community cards are out, 0-10.
    pub(crate) fn postflop_strength(hole: HoleCards, board: &[Card]) -> u8 {
        let rank = evaluate(&hole, board);
        let base = match rank.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        // a queen or better leading the tiebreaks
        let kicker_boost = u8::from(rank.tiebreaks[0] >= 12);
        (base + kicker_boost).min(10)
    }

    /// Share of the final pot a call would buy: pot / (pot + call).
    pub(crate) fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// Raise-to of `num / den` of the pot on top of the current bet, kept
    /// within the engine's limits.
    fn sized_raise(req: &ActionRequest, num: u32, den: u32) -> PlayerAction {
        let target = req.current_bet + req.pot * num / den;
        PlayerAction::Raise(target.max(req.min_raise).min(req.max_raise))
    }

    fn decide(strength: u8, req: &ActionRequest) -> PlayerAction {
        let can_raise = req.allows(ActionKind::Raise);
        if req.to_call == 0 {
            return match strength {
                9..=10 if can_raise => Self::sized_raise(req, 2, 3),
                7..=8 if can_raise => Self::sized_raise(req, 1, 2),
                _ => PlayerAction::Check,
            };
        }

        // calling puts the whole stack in
        if req.to_call >= req.stack {
            return if strength >= 7 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }

        let odds = Self::pot_odds(req.pot, req.to_call);
        match strength {
            9..=10 if can_raise => Self::sized_raise(req, 1, 2),
            7..=10 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || req.to_call <= req.pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || req.to_call <= req.pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

impl ActionSource for BaselineBot {
    fn request_action(&mut self, req: &ActionRequest) -> PlayerAction {
        let Some(hole) = req.hole else {
            return if req.allows(ActionKind::Check) {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        };
        let strength = if req.street == Street::Preflop || req.board.len() < 3 {
            Self::preflop_strength(hole)
        } else {
            Self::postflop_strength(hole, &req.board)
        };
        Self::decide(strength, req)
    }
}
