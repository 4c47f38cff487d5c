use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards, Rank};

/// Poker hand categories, weakest first. The discriminants are the
/// category numbers reported to the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Totally ordered strength of a hand.
///
/// Comparison is by `category` first, then `tiebreaks` lexicographically.
/// Unused tiebreak slots are zero so every rank compares over the same
/// width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // rank values (2..=14), ordered high -> low for tiebreaks
    pub tiebreaks: [u8; 5],
}

impl HandRank {
    fn new(category: Category, values: &[u8]) -> Self {
        let mut tiebreaks = [0u8; 5];
        for (slot, v) in tiebreaks.iter_mut().zip(values) {
            *slot = *v;
        }
        Self {
            category,
            tiebreaks,
        }
    }

    /// Non-zero tiebreak values, in comparison order.
    pub fn significant_tiebreaks(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiebreaks.iter().copied().take_while(|v| *v != 0)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category.name())?;
        let labels: Vec<&str> = self
            .significant_tiebreaks()
            .filter_map(Rank::from_u8)
            .map(Rank::label)
            .collect();
        if !labels.is_empty() {
            write!(f, " ({})", labels.join(", "))?;
        }
        Ok(())
    }
}

/// Evaluates a player's best hand from their hole cards and the board.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::{parse_cards, HoleCards};
/// use holdem_engine::hand::{evaluate, Category};
///
/// let hole = parse_cards("As Ah").unwrap();
/// let board = parse_cards("Ad Ac Ks 2h 3d").unwrap();
/// let rank = evaluate(&HoleCards([hole[0], hole[1]]), &board);
/// assert_eq!(rank.category, Category::FourOfAKind);
/// assert_eq!(rank.tiebreaks, [14, 13, 0, 0, 0]);
/// ```
pub fn evaluate(hole: &HoleCards, community: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(2 + community.len());
    cards.extend_from_slice(&hole.cards());
    cards.extend_from_slice(community);
    evaluate_cards(&cards)
}

/// Evaluates the best five-card hand contained in `cards`.
///
/// The result is identical to ranking every five-card subset and keeping
/// the maximum, but is derived directly from rank and suit counts. With
/// fewer than five cards the missing tiebreak slots stay zero. Input order
/// never matters.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;
    for c in cards {
        let r = c.rank.value();
        let s = c.suit.index();
        rank_counts[r as usize] += 1;
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
        rank_mask |= 1 << r;
    }

    let flush_suits = (0..4).filter(|&s| suit_counts[s] >= 5);

    // Straight flush, ace-high being the royal flush
    if let Some(high) = flush_suits
        .clone()
        .filter_map(|s| straight_high(suit_masks[s]))
        .max()
    {
        return if high == Rank::Ace.value() {
            HandRank::new(Category::RoyalFlush, &[])
        } else {
            HandRank::new(Category::StraightFlush, &[high])
        };
    }

    if let Some(quad) = highest_with_count(&rank_counts, 4, &[]) {
        let ranks = with_kickers(&[quad], &rank_counts, 1);
        return HandRank::new(Category::FourOfAKind, &ranks);
    }

    if let Some(trip) = highest_with_count(&rank_counts, 3, &[]) {
        // a second triple can supply the pair
        if let Some(pair) = highest_with_count(&rank_counts, 2, &[trip]) {
            return HandRank::new(Category::FullHouse, &[trip, pair]);
        }
    }

    if let Some(best) = flush_suits.map(|s| top_ranks(suit_masks[s], 5)).max() {
        return HandRank::new(Category::Flush, &best);
    }

    if let Some(high) = straight_high(rank_mask) {
        return HandRank::new(Category::Straight, &[high]);
    }

    if let Some(trip) = highest_with_count(&rank_counts, 3, &[]) {
        let ranks = with_kickers(&[trip], &rank_counts, 2);
        return HandRank::new(Category::ThreeOfAKind, &ranks);
    }

    if let Some(high_pair) = highest_with_count(&rank_counts, 2, &[]) {
        if let Some(low_pair) = highest_with_count(&rank_counts, 2, &[high_pair]) {
            // the kicker may come from a third pair
            let ranks = with_kickers(&[high_pair, low_pair], &rank_counts, 1);
            return HandRank::new(Category::TwoPair, &ranks);
        }
        let ranks = with_kickers(&[high_pair], &rank_counts, 3);
        return HandRank::new(Category::OnePair, &ranks);
    }

    HandRank::new(Category::HighCard, &kickers(&rank_counts, &[], 5))
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

/// High card of the best five-rank run in `mask`. Ace plays high only,
/// so the lowest straight is 2-6.
fn straight_high(mask: u16) -> Option<u8> {
    (6..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        mask & window == window
    })
}

fn highest_with_count(rank_counts: &[u8; 15], at_least: u8, exclude: &[u8]) -> Option<u8> {
    (2..=14u8)
        .rev()
        .find(|r| rank_counts[*r as usize] >= at_least && !exclude.contains(r))
}

/// `made` followed by the best `n` kickers from ranks not in `made`.
fn with_kickers(made: &[u8], rank_counts: &[u8; 15], n: usize) -> Vec<u8> {
    let mut ranks = made.to_vec();
    ranks.extend(kickers(rank_counts, made, n));
    ranks
}

/// Best `n` card ranks outside `exclude`, counting repeated ranks.
fn kickers(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| !exclude.contains(r))
        .flat_map(|r| std::iter::repeat_n(r, rank_counts[r as usize] as usize))
        .take(n)
        .collect()
}

fn top_ranks(mask: u16, n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| mask & (1u16 << *r) != 0)
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn rank_of(s: &str) -> HandRank {
        evaluate_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn straight_detection_ignores_wheel() {
        let r = rank_of("Ac 2d 3h 4s 5c 9d Jh");
        assert_eq!(r.category, Category::HighCard);
    }

    #[test]
    fn lowest_straight_is_six_high() {
        let r = rank_of("2c 3d 4h 5s 6c");
        assert_eq!(r, HandRank::new(Category::Straight, &[6]));
    }

    #[test]
    fn display_lists_tiebreak_labels() {
        assert_eq!(rank_of("As Ah Ad Ac Ks").to_string(), "Four of a Kind (A, K)");
        assert_eq!(rank_of("10s Js Qs Ks As").to_string(), "Royal Flush");
    }

    #[test]
    fn fewer_than_five_cards_pad_with_zero() {
        let r = rank_of("9c 9d");
        assert_eq!(r.category, Category::OnePair);
        assert_eq!(r.tiebreaks, [9, 0, 0, 0, 0]);
    }
}
