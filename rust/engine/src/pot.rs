use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Single pot for one hand plus the betting level of the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
    current_bet: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Highest commitment a non-folded player must match this round.
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn add(&mut self, amount: u32) {
        self.total += amount;
    }

    pub fn raise_to(&mut self, level: u32) {
        self.current_bet = self.current_bet.max(level);
    }

    pub fn start_round(&mut self) {
        self.current_bet = 0;
    }

    pub(crate) fn remove(&mut self, amount: u32) {
        self.total = self.total.saturating_sub(amount);
    }

    /// Empties the pot, returning what was in it.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.total)
    }
}

/// Divides `pot` evenly among `winners`, which must be in seat order.
/// The integer remainder goes to the first winner, so the payouts always
/// sum to `pot`.
///
/// ```
/// use holdem_engine::player::PlayerId;
/// use holdem_engine::pot::split_pot;
///
/// let shares = split_pot(101, &[PlayerId(1), PlayerId(3)]);
/// assert_eq!(shares, vec![(PlayerId(1), 51), (PlayerId(3), 50)]);
/// ```
pub fn split_pot(pot: u32, winners: &[PlayerId]) -> Vec<(PlayerId, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = pot / n;
    let remainder = pot % n;
    winners
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, if i == 0 { share + remainder } else { share }))
        .collect()
}

/// Chips in the largest contribution that no other player matched.
///
/// Returns the owner and the excess over the second-largest contribution
/// among `contributions`. Folded players' chips count toward matching since
/// they stay in the pot.
pub fn uncalled_excess(contributions: &[(PlayerId, u32)]) -> Option<(PlayerId, u32)> {
    let (top_idx, &(top_id, top)) = contributions
        .iter()
        .enumerate()
        .max_by_key(|(_, (_, amount))| *amount)?;
    let second = contributions
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != top_idx)
        .map(|(_, (_, amount))| *amount)
        .max()
        .unwrap_or(0);
    (top > second).then(|| (top_id, top - second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pot_gives_remainder_to_first_winner() {
        let shares = split_pot(101, &[PlayerId(0), PlayerId(2)]);
        assert_eq!(shares, vec![(PlayerId(0), 51), (PlayerId(2), 50)]);
        let total: u32 = shares.iter().map(|(_, s)| s).sum();
        assert_eq!(total, 101);
    }

    #[test]
    fn three_way_split_conserves_chips() {
        let shares = split_pot(100, &[PlayerId(1), PlayerId(4), PlayerId(5)]);
        assert_eq!(shares[0].1, 34);
        assert_eq!(shares[1].1, 33);
        assert_eq!(shares.iter().map(|(_, s)| s).sum::<u32>(), 100);
    }

    #[test]
    fn single_winner_takes_everything() {
        assert_eq!(split_pot(75, &[PlayerId(3)]), vec![(PlayerId(3), 75)]);
        assert!(split_pot(75, &[]).is_empty());
    }

    #[test]
    fn uncalled_excess_over_second_largest() {
        let c = [(PlayerId(0), 500), (PlayerId(1), 200), (PlayerId(2), 50)];
        assert_eq!(uncalled_excess(&c), Some((PlayerId(0), 300)));
    }

    #[test]
    fn matched_contributions_have_no_excess() {
        let c = [(PlayerId(0), 200), (PlayerId(1), 200)];
        assert_eq!(uncalled_excess(&c), None);
    }

    #[test]
    fn pot_tracks_level_and_total() {
        let mut pot = Pot::new();
        pot.add(10);
        pot.add(20);
        pot.raise_to(20);
        pot.raise_to(10);
        assert_eq!(pot.total(), 30);
        assert_eq!(pot.current_bet(), 20);
        pot.start_round();
        assert_eq!(pot.current_bet(), 0);
        assert_eq!(pot.take(), 30);
        assert_eq!(pot.total(), 0);
    }
}
