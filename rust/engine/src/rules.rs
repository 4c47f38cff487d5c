use serde::{Deserialize, Serialize};

use crate::errors::IllegalAction;
use crate::player::{ActionKind, Player, PlayerAction as A};
use crate::pot::Pot;

/// An action the engine has accepted, with the chip amounts resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved from the stack to match the current bet
    Call(u32),
    /// New round commitment
    Raise(u32),
    /// Whole stack committed; the value is the resulting round commitment
    AllIn(u32),
}

/// What a single player faces when it is their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub stack: u32,
    pub committed: u32,
    pub current_bet: u32,
    pub big_blind: u32,
}

impl BetContext {
    pub fn new(player: &Player, pot: &Pot, big_blind: u32) -> Self {
        Self {
            stack: player.stack(),
            committed: player.committed(),
            current_bet: pot.current_bet(),
            big_blind,
        }
    }

    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.committed)
    }

    /// Smallest legal raise-to: double the current bet, never below the big blind.
    pub fn min_raise(&self) -> u32 {
        self.current_bet.saturating_mul(2).max(self.big_blind)
    }

    /// Largest raise-to the stack can cover.
    pub fn max_raise(&self) -> u32 {
        self.committed + self.stack
    }

    pub fn legal_options(&self) -> Vec<ActionKind> {
        let mut legal = Vec::with_capacity(3);
        if self.to_call() == 0 {
            legal.push(ActionKind::Check);
        } else {
            legal.push(ActionKind::Call);
        }
        if self.stack > self.to_call() {
            legal.push(ActionKind::Raise);
        }
        legal.push(ActionKind::Fold);
        legal
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// Amounts the stack cannot cover are clamped to an all-in instead of being
/// refused: a short call, or a raise to at least `committed + stack`, becomes
/// [`ValidatedAction::AllIn`]. An all-in is accepted even when it falls short
/// of the minimum raise.
///
/// # Errors
///
/// - [`IllegalAction::CannotCheck`] - checking while behind the current bet
/// - [`IllegalAction::NothingToCall`] - calling when already level
/// - [`IllegalAction::RaiseTooSmall`] - raising to less than [`BetContext::min_raise`]
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = BetContext { stack: 1000, committed: 0, current_bet: 50, big_blind: 20 };
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
/// assert_eq!(validate_action(&ctx, PlayerAction::Raise(100)), Ok(ValidatedAction::Raise(100)));
///
/// // raise beyond the stack is clamped to all-in
/// assert_eq!(validate_action(&ctx, PlayerAction::Raise(5000)), Ok(ValidatedAction::AllIn(1000)));
/// ```
///
/// ```
/// use holdem_engine::rules::{validate_action, BetContext};
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::errors::IllegalAction;
///
/// let ctx = BetContext { stack: 1000, committed: 0, current_bet: 50, big_blind: 20 };
/// assert_eq!(
///     validate_action(&ctx, PlayerAction::Check),
///     Err(IllegalAction::CannotCheck { to_call: 50 })
/// );
/// assert!(matches!(
///     validate_action(&ctx, PlayerAction::Raise(60)),
///     Err(IllegalAction::RaiseTooSmall { minimum: 100, .. })
/// ));
/// ```
pub fn validate_action(ctx: &BetContext, action: A) -> Result<ValidatedAction, IllegalAction> {
    let to_call = ctx.to_call();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(IllegalAction::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(IllegalAction::NothingToCall)
            } else if ctx.stack <= to_call {
                Ok(ValidatedAction::AllIn(ctx.max_raise()))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(amount) => {
            if amount >= ctx.max_raise() {
                Ok(ValidatedAction::AllIn(ctx.max_raise()))
            } else if amount < ctx.min_raise() {
                Err(IllegalAction::RaiseTooSmall {
                    amount,
                    minimum: ctx.min_raise(),
                })
            } else {
                Ok(ValidatedAction::Raise(amount))
            }
        }
    }
}
