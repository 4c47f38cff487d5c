use holdem_engine::player::PlayerId;
use holdem_engine::pot::{split_pot, uncalled_excess, Pot};

#[test]
fn pot_of_101_splits_51_50() {
    let shares = split_pot(101, &[PlayerId(0), PlayerId(1)]);
    assert_eq!(shares, vec![(PlayerId(0), 51), (PlayerId(1), 50)]);
    assert_eq!(shares.iter().map(|(_, c)| c).sum::<u32>(), 101);
}

#[test]
fn split_always_conserves_chips() {
    let winners: Vec<PlayerId> = (0..8).map(PlayerId).collect();
    for pot in [0u32, 1, 7, 99, 1000, 12_345] {
        for n in 1..=winners.len() {
            let shares = split_pot(pot, &winners[..n]);
            assert_eq!(shares.len(), n);
            assert_eq!(shares.iter().map(|(_, c)| c).sum::<u32>(), pot);
            // nobody gets more than one chip over anyone else
            let max = shares.iter().map(|(_, c)| *c).max().unwrap();
            let min = shares.iter().map(|(_, c)| *c).min().unwrap();
            assert!(max - min < n as u32);
        }
    }
}

#[test]
fn all_in_raise_over_short_caller_is_partly_returned() {
    let contributions = [(PlayerId(0), 1000), (PlayerId(1), 400), (PlayerId(2), 20)];
    assert_eq!(uncalled_excess(&contributions), Some((PlayerId(0), 600)));
}

#[test]
fn lone_contributor_gets_everything_back() {
    assert_eq!(
        uncalled_excess(&[(PlayerId(3), 20)]),
        Some((PlayerId(3), 20))
    );
    assert_eq!(uncalled_excess(&[]), None);
}

#[test]
fn betting_level_resets_each_round_but_total_accumulates() {
    let mut pot = Pot::new();
    pot.add(30);
    pot.raise_to(20);
    pot.start_round();
    pot.add(80);
    pot.raise_to(40);
    assert_eq!(pot.current_bet(), 40);
    assert_eq!(pot.total(), 110);
}
