use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A shuffled 52-card deck. The top of the deck is the end of `cards`,
/// so drawing and burning are both `pop`s.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in a fresh uniform permutation.
    pub fn new_shuffled() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Deterministic shuffle; the same seed always yields the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::shuffled_with(&mut ChaCha20Rng::seed_from_u64(seed))
    }

    fn shuffled_with(rng: &mut ChaCha20Rng) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Discards the top card face down.
    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
