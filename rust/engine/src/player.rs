use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::errors::GameError;

/// Seat index at the table; stable for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Represents a player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when the player's bet already matches the current bet)
    Check,
    /// Call the current bet
    Call,
    /// Raise the round's commitment to the given total
    Raise(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "fold"),
            PlayerAction::Check => write!(f, "check"),
            PlayerAction::Call => write!(f, "call"),
            PlayerAction::Raise(to) => write!(f, "raise to {}", to),
        }
    }
}

/// Action shapes offered to an action source, without amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Check,
    Call,
    Raise,
    Fold,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seated player. Hand-scoped fields are reset by [`Player::reset_for_hand`],
/// round-scoped ones by [`Player::reset_for_round`]; the stack persists.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    stack: u32,
    /// `None` until both hole cards are dealt
    hole: Option<HoleCards>,
    pending: Option<Card>,
    /// Chips committed in the current betting round
    committed: u32,
    /// Chips put into the pot this hand, blinds included
    contributed: u32,
    folded: bool,
    all_in: bool,
    eliminated: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hole: None,
            pending: None,
            committed: 0,
            contributed: 0,
            folded: false,
            all_in: false,
            eliminated: stack == 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> Option<HoleCards> {
        self.hole
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn contributed(&self) -> u32 {
        self.contributed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Seated with chips; takes part in the next hand.
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    /// Still holds a claim to the pot this hand.
    pub fn in_hand(&self) -> bool {
        !self.eliminated && !self.folded
    }

    /// Can still be asked for a decision this hand.
    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.all_in
    }

    /// Deals one hole card. The hand only becomes visible once the second
    /// card arrives.
    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.is_some() {
            return Err(GameError::HoleCardsFull);
        }
        match self.pending.take() {
            None => self.pending = Some(c),
            Some(first) => self.hole = Some(HoleCards([first, c])),
        }
        Ok(())
    }

    pub fn reset_for_hand(&mut self) {
        self.hole = None;
        self.pending = None;
        self.committed = 0;
        self.contributed = 0;
        self.folded = false;
        self.all_in = false;
    }

    pub fn reset_for_round(&mut self) {
        self.committed = 0;
    }

    /// Moves `amount` chips from the stack into this round's commitment.
    /// An emptied stack marks the player all-in.
    pub fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientStack {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.committed += amount;
        self.contributed += amount;
        if self.stack == 0 {
            self.all_in = true;
        }
        Ok(())
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Hands back chips nobody called. Only the hand total shrinks; the
    /// round commitment is already settled by then.
    pub(crate) fn refund(&mut self, amount: u32) {
        self.contributed = self.contributed.saturating_sub(amount);
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }
}
