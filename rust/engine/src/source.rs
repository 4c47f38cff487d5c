//! Seams through which decisions enter the engine.
//!
//! The engine never decides for a player. Each turn it builds an
//! [`ActionRequest`] and blocks on an [`ActionSource`] until an action comes
//! back. Illegal answers are reported through [`ActionSource::on_rejected`]
//! and the same request is asked again.

use std::collections::VecDeque;

use crate::cards::{Card, HoleCards};
use crate::errors::GameError;
use crate::history::Street;
use crate::player::{ActionKind, PlayerAction, PlayerId};

/// Everything a player may see when asked to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub player: PlayerId,
    pub street: Street,
    pub hole: Option<HoleCards>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub committed: u32,
    pub stack: u32,
    pub to_call: u32,
    pub legal: Vec<ActionKind>,
    /// Smallest legal raise-to
    pub min_raise: u32,
    /// Raise-to that commits the whole stack
    pub max_raise: u32,
}

impl ActionRequest {
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.legal.contains(&kind)
    }
}

pub trait ActionSource {
    /// Blocks until the player in `request` has chosen an action.
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction;

    /// Called when the previous answer to `request` was refused.
    fn on_rejected(&mut self, _request: &ActionRequest, _error: &GameError) {}
}

impl<S: ActionSource + ?Sized> ActionSource for Box<S> {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        (**self).request_action(request)
    }

    fn on_rejected(&mut self, request: &ActionRequest, error: &GameError) {
        (**self).on_rejected(request, error)
    }
}

/// Routes each request to the source seated at the requesting player's seat.
pub struct SeatedSources {
    seats: Vec<Box<dyn ActionSource>>,
}

impl SeatedSources {
    pub fn new(seats: Vec<Box<dyn ActionSource>>) -> Self {
        Self { seats }
    }
}

impl ActionSource for SeatedSources {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        match self.seats.get_mut(request.player.0) {
            Some(source) => source.request_action(request),
            // an unseated id has nobody to ask
            None => PlayerAction::Fold,
        }
    }

    fn on_rejected(&mut self, request: &ActionRequest, error: &GameError) {
        if let Some(source) = self.seats.get_mut(request.player.0) {
            source.on_rejected(request, error);
        }
    }
}

/// Replays a fixed list of actions in order. Once the script runs out it
/// checks when possible and folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<PlayerAction>,
    rejections: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            rejections: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl ActionSource for ScriptedSource {
    fn request_action(&mut self, request: &ActionRequest) -> PlayerAction {
        self.script.pop_front().unwrap_or(if request.allows(ActionKind::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        })
    }

    fn on_rejected(&mut self, _request: &ActionRequest, _error: &GameError) {
        self.rejections += 1;
    }
}
