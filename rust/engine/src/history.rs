use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::hand::HandRank;
use crate::player::{PlayerAction, PlayerId};
use crate::rules::ValidatedAction;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    /// Board size once this street's cards are out.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

/// Records a single accepted action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub street: Street,
    /// What the source asked for
    pub action: PlayerAction,
    /// What the engine applied after clamping
    pub applied: ValidatedAction,
}

/// One player's cards and rank at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub player: PlayerId,
    pub hole: HoleCards,
    pub rank: HandRank,
}

/// A wallet call that failed at a hand boundary. Chip stacks are unaffected.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WalletWarning {
    pub player: PlayerId,
    pub message: String,
}

/// Complete record of one hand: actions, board, showdown and settlement.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// 1-based hand counter within the session
    pub hand_number: u32,
    /// Seed used for the shuffle, for reproducing the deal
    pub seed: u64,
    pub dealer: PlayerId,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Empty when everyone but one player folded
    pub showdown: Vec<ShowdownEntry>,
    pub winners: Vec<PlayerId>,
    /// Chips paid out per winner; sums to the pot
    pub payouts: Vec<(PlayerId, u32)>,
    /// Uncalled chips handed back before the split
    #[serde(default)]
    pub refund: Option<(PlayerId, u32)>,
    pub pot: u32,
    pub eliminated: Vec<PlayerId>,
    #[serde(default)]
    pub wallet_warnings: Vec<WalletWarning>,
}

impl HandOutcome {
    pub fn went_to_showdown(&self) -> bool {
        !self.showdown.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
