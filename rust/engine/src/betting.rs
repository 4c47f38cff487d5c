//! One betting round as an explicit state machine.
//!
//! A round is either waiting on a specific player or complete. It completes
//! when every player who can still act has matched the current bet and has
//! acted since the bet level last went up, or when at most one player is
//! left in the hand. Raising clears the acted flag of everyone else who can
//! still act, which reopens the action for them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::Card;
use crate::errors::{GameError, IllegalAction};
use crate::history::Street;
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot::Pot;
use crate::rules::{validate_action, BetContext, ValidatedAction};
use crate::source::{ActionRequest, ActionSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    AwaitingAction(PlayerId),
    RoundComplete,
}

/// Something that happened while driving a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Acted {
        player: PlayerId,
        action: PlayerAction,
        applied: ValidatedAction,
    },
    /// The source kept answering illegally and the player was folded.
    ForcedFold { player: PlayerId, attempts: u32 },
}

#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    big_blind: u32,
    /// Indexed by seat; cleared for others whenever the level is raised
    acted: Vec<bool>,
    state: RoundState,
}

impl BettingRound {
    /// Opens a round where the first decision belongs to the first eligible
    /// seat after `after` (the big blind pre-flop, the dealer afterwards).
    pub fn start(street: Street, players: &[Player], pot: &Pot, after: PlayerId, big_blind: u32) -> Self {
        let mut round = Self {
            street,
            big_blind,
            acted: vec![false; players.len()],
            state: RoundState::RoundComplete,
        };
        round.state = round.next_state(players, pot, after.0);
        round
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == RoundState::RoundComplete
    }

    pub fn has_acted(&self, player: PlayerId) -> bool {
        self.acted.get(player.0).copied().unwrap_or(false)
    }

    /// Builds the request for the player whose turn it is.
    pub fn request(&self, players: &[Player], pot: &Pot, board: &[Card]) -> Option<ActionRequest> {
        let RoundState::AwaitingAction(id) = self.state else {
            return None;
        };
        let player = players.get(id.0)?;
        let ctx = BetContext::new(player, pot, self.big_blind);
        Some(ActionRequest {
            player: id,
            street: self.street,
            hole: player.hole_cards(),
            board: board.to_vec(),
            pot: pot.total(),
            current_bet: ctx.current_bet,
            committed: ctx.committed,
            stack: ctx.stack,
            to_call: ctx.to_call(),
            legal: ctx.legal_options(),
            min_raise: ctx.min_raise(),
            max_raise: ctx.max_raise(),
        })
    }

    /// Applies one action from `seat`. Refused actions leave every piece of
    /// state untouched.
    pub fn apply(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        seat: PlayerId,
        action: PlayerAction,
    ) -> Result<ValidatedAction, GameError> {
        let expected = match self.state {
            RoundState::AwaitingAction(id) => id,
            RoundState::RoundComplete => return Err(GameError::RoundComplete),
        };
        if seat != expected {
            return Err(IllegalAction::NotPlayersTurn {
                expected,
                actual: seat,
            }
            .into());
        }
        let player = players
            .get_mut(seat.0)
            .ok_or(IllegalAction::PlayerInactive(seat))?;
        if !player.can_act() {
            return Err(IllegalAction::PlayerInactive(seat).into());
        }

        let ctx = BetContext::new(player, pot, self.big_blind);
        let applied = validate_action(&ctx, action)?;
        let mut reopened = false;
        match applied {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(amount) => {
                player.commit(amount)?;
                pot.add(amount);
            }
            ValidatedAction::Raise(to) | ValidatedAction::AllIn(to) => {
                let increment = to - player.committed();
                player.commit(increment)?;
                pot.add(increment);
                if to > pot.current_bet() {
                    pot.raise_to(to);
                    reopened = true;
                }
            }
        }

        self.acted[seat.0] = true;
        if reopened {
            for other in players.iter().filter(|p| p.id() != seat && p.can_act()) {
                self.acted[other.id().0] = false;
            }
        }
        self.state = self.next_state(players, pot, seat.0);
        debug!(player = %seat, street = ?self.street, ?action, ?applied, pot = pot.total(), "action applied");
        Ok(applied)
    }

    /// Folds the player on turn without going through validation.
    fn force_fold(&mut self, players: &mut [Player], pot: &Pot, seat: PlayerId) {
        if let Some(p) = players.get_mut(seat.0) {
            p.fold();
        }
        if let Some(flag) = self.acted.get_mut(seat.0) {
            *flag = true;
        }
        self.state = self.next_state(players, pot, seat.0);
    }

    /// Drives the round to completion, asking `source` for every decision.
    ///
    /// Illegal answers are reported back to the source and the same player is
    /// asked again; after `max_reprompts` refusals in a row the player is
    /// folded. `on_event` sees the table after each accepted action.
    pub fn run(
        &mut self,
        players: &mut [Player],
        pot: &mut Pot,
        board: &[Card],
        source: &mut dyn ActionSource,
        max_reprompts: u32,
        mut on_event: impl FnMut(&RoundEvent, &[Player], &Pot),
    ) -> Result<(), GameError> {
        let mut attempts = 0u32;
        while let Some(request) = self.request(players, pot, board) {
            let action = source.request_action(&request);
            match self.apply(players, pot, request.player, action) {
                Ok(applied) => {
                    attempts = 0;
                    let event = RoundEvent::Acted {
                        player: request.player,
                        action,
                        applied,
                    };
                    on_event(&event, &*players, &*pot);
                }
                Err(err @ GameError::IllegalAction(_)) => {
                    attempts += 1;
                    warn!(player = %request.player, ?action, error = %err, attempts, "action rejected");
                    source.on_rejected(&request, &err);
                    if attempts >= max_reprompts {
                        warn!(player = %request.player, attempts, "too many illegal actions, folding");
                        self.force_fold(players, &*pot, request.player);
                        let event = RoundEvent::ForcedFold {
                            player: request.player,
                            attempts,
                        };
                        on_event(&event, &*players, &*pot);
                        attempts = 0;
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn round_over(&self, players: &[Player], pot: &Pot) -> bool {
        if players.iter().filter(|p| p.in_hand()).count() <= 1 {
            return true;
        }
        let actors: Vec<&Player> = players.iter().filter(|p| p.can_act()).collect();
        match actors.as_slice() {
            [] => true,
            // nobody left to bet against
            [only] if only.committed() >= pot.current_bet() => true,
            _ => actors
                .iter()
                .all(|p| self.has_acted(p.id()) && p.committed() == pot.current_bet()),
        }
    }

    /// Next seat clockwise from `from` that still owes a decision.
    fn next_state(&self, players: &[Player], pot: &Pot, from: usize) -> RoundState {
        if self.round_over(players, pot) {
            return RoundState::RoundComplete;
        }
        let n = players.len();
        (1..=n)
            .map(|step| &players[(from + step) % n])
            .find(|p| {
                p.can_act() && (!self.has_acted(p.id()) || p.committed() < pot.current_bet())
            })
            .map_or(RoundState::RoundComplete, |p| RoundState::AwaitingAction(p.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[u32]) -> Vec<Player> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| Player::new(PlayerId(i), format!("p{}", i), s))
            .collect()
    }

    #[test]
    fn first_actor_follows_start_seat() {
        let players = table(&[100, 100, 100]);
        let pot = Pot::new();
        let round = BettingRound::start(Street::Flop, &players, &pot, PlayerId(0), 20);
        assert_eq!(round.state(), RoundState::AwaitingAction(PlayerId(1)));
        let round = BettingRound::start(Street::Flop, &players, &pot, PlayerId(2), 20);
        assert_eq!(round.state(), RoundState::AwaitingAction(PlayerId(0)));
    }

    #[test]
    fn out_of_turn_action_is_refused_without_mutation() {
        let mut players = table(&[100, 100, 100]);
        let mut pot = Pot::new();
        let mut round = BettingRound::start(Street::Flop, &players, &pot, PlayerId(0), 20);
        let err = round
            .apply(&mut players, &mut pot, PlayerId(2), PlayerAction::Raise(40))
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalAction(IllegalAction::NotPlayersTurn { .. })
        ));
        assert_eq!(pot.total(), 0);
        assert_eq!(players[2].stack(), 100);
        assert_eq!(round.state(), RoundState::AwaitingAction(PlayerId(1)));
    }

    #[test]
    fn complete_round_refuses_more_actions() {
        let mut players = table(&[100, 100]);
        let mut pot = Pot::new();
        let mut round = BettingRound::start(Street::River, &players, &pot, PlayerId(0), 20);
        round.apply(&mut players, &mut pot, PlayerId(1), PlayerAction::Check).unwrap();
        round.apply(&mut players, &mut pot, PlayerId(0), PlayerAction::Check).unwrap();
        assert!(round.is_complete());
        assert_eq!(
            round.apply(&mut players, &mut pot, PlayerId(1), PlayerAction::Check),
            Err(GameError::RoundComplete)
        );
    }
}
