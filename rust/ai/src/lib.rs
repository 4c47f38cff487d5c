//! # holdem-ai: Computer Players
//!
//! Bots that answer the engine's [`ActionRequest`]s. Every bot implements
//! [`ActionSource`], so it can sit at any seat of a
//! [`SeatedSources`](holdem_engine::source::SeatedSources) table.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::snapshot::NullSink;
//! use holdem_engine::source::SeatedSources;
//! use holdem_engine::wallet::NoWallet;
//!
//! let seats = vec![create_ai("baseline", 1).unwrap(), create_ai("calling", 2).unwrap()];
//! let mut table = SeatedSources::new(seats);
//! let mut engine = Engine::new(TableConfig::default(), &["b1", "b2"]).unwrap().with_seed(42);
//! let outcome = engine.play_hand(&mut table, &mut NullSink, &mut NoWallet).unwrap();
//! assert_eq!(outcome.hand_number, 1);
//! ```
//!
//! ## Bot Types
//!
//! - `"baseline"` - tight rule-based play ([`baseline::BaselineBot`])
//! - `"calling"` - never folds, never raises ([`CallingStation`])
//! - `"random"` - uniform over legal actions, seeded ([`RandomBot`])

use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::source::{ActionRequest, ActionSource};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub mod baseline;

/// Names accepted by [`create_ai`].
pub const BOT_TYPES: [&str; 3] = ["baseline", "calling", "random"];

/// Checks when free, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl ActionSource for CallingStation {
    fn request_action(&mut self, req: &ActionRequest) -> PlayerAction {
        if req.allows(ActionKind::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }
}

/// Picks uniformly among the legal action kinds; raises land anywhere
/// between the minimum and an all-in. Reproducible from its seed.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: ChaCha20Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ActionSource for RandomBot {
    fn request_action(&mut self, req: &ActionRequest) -> PlayerAction {
        match req.legal.choose(&mut self.rng) {
            Some(ActionKind::Check) => PlayerAction::Check,
            Some(ActionKind::Call) => PlayerAction::Call,
            Some(ActionKind::Raise) => {
                let low = req.min_raise.min(req.max_raise);
                PlayerAction::Raise(self.rng.random_range(low..=req.max_raise))
            }
            Some(ActionKind::Fold) | None => PlayerAction::Fold,
        }
    }
}

/// Creates a bot by type name. `seed` only matters for bots with
/// randomness. Returns `None` for unknown names.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert!(create_ai("baseline", 0).is_some());
/// assert!(create_ai("shark", 0).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn ActionSource>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineBot::new())),
        "calling" => Some(Box::new(CallingStation)),
        "random" => Some(Box::new(RandomBot::new(seed))),
        _ => None,
    }
}
