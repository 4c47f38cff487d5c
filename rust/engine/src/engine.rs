use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::betting::{BettingRound, RoundEvent};
use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::evaluate;
use crate::history::{ActionRecord, HandOutcome, ShowdownEntry, Street, WalletWarning};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot::{split_pot, uncalled_excess, Pot};
use crate::rules::ValidatedAction;
use crate::snapshot::{PresentationSink, SnapshotHeader, TableSnapshot};
use crate::source::ActionSource;
use crate::wallet::WalletService;

/// Runs complete hands at one table, carrying stacks and the dealer button
/// from hand to hand.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::Engine;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::snapshot::NullSink;
/// use holdem_engine::source::ScriptedSource;
/// use holdem_engine::wallet::NoWallet;
///
/// let mut engine = Engine::new(TableConfig::default(), &["alice", "bob"])
///     .unwrap()
///     .with_seed(7);
///
/// // the small blind limps, then the script runs dry and everyone checks
/// let mut source = ScriptedSource::new([PlayerAction::Call]);
/// let outcome = engine.play_hand(&mut source, &mut NullSink, &mut NoWallet).unwrap();
/// assert_eq!(outcome.board.len(), 5);
/// assert_eq!(outcome.payouts.iter().map(|(_, c)| c).sum::<u32>(), outcome.pot);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    state: GameState,
    /// Draws the shuffle seed of every hand
    seeds: ChaCha20Rng,
    hand_number: u32,
}

impl Engine {
    pub fn new<S: AsRef<str>>(config: TableConfig, names: &[S]) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(names, &config)?;
        Ok(Self {
            config,
            state,
            seeds: ChaCha20Rng::seed_from_u64(rand::random()),
            hand_number: 0,
        })
    }

    /// Makes every following deal reproducible from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = ChaCha20Rng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn dealer(&self) -> PlayerId {
        self.state.dealer()
    }

    pub fn hands_played(&self) -> u32 {
        self.hand_number
    }

    /// True once fewer than two players have chips left.
    pub fn is_over(&self) -> bool {
        self.state.active_count() < 2
    }

    /// The last player standing, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_over() {
            return None;
        }
        self.state
            .players()
            .iter()
            .find(|p| p.is_active())
            .map(|p| p.id())
    }

    /// Deposits each player's buy-in with the wallet before the first hand.
    pub fn seat_players(&mut self, wallet: &mut dyn WalletService) -> Vec<WalletWarning> {
        let mut warnings = Vec::new();
        for p in self.state.players() {
            if let Err(e) = wallet.deposit(p.id(), p.stack() as u64) {
                warn!(player = %p.id(), error = %e, "buy-in deposit failed");
                warnings.push(WalletWarning {
                    player: p.id(),
                    message: e.to_string(),
                });
            }
        }
        warnings
    }

    /// Plays one hand from blinds to settlement.
    ///
    /// Every decision is requested from `source`, every state change is
    /// published to `sink`, and busted players are cashed out of `wallet`.
    /// Only a dealing failure aborts the hand.
    pub fn play_hand(
        &mut self,
        source: &mut dyn ActionSource,
        sink: &mut dyn PresentationSink,
        wallet: &mut dyn WalletService,
    ) -> Result<HandOutcome, GameError> {
        if self.state.active_count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        self.hand_number += 1;
        let seed: u64 = self.seeds.random();
        let mut deck = Deck::new_with_seed(seed);
        let dealer = self.state.dealer();
        for p in self.state.players_mut() {
            p.reset_for_hand();
        }
        info!(hand = self.hand_number, seed, dealer = %dealer, "hand started");

        let mut pot = Pot::new();
        let mut board: Vec<Card> = Vec::with_capacity(5);
        let mut actions: Vec<ActionRecord> = Vec::new();

        let seats = self.state.active_seats_after(dealer);
        let (sb, bb) = (seats[0], seats[1]);
        self.post_blind(sb, self.config.small_blind, &mut pot)?;
        self.post_blind(bb, self.config.big_blind, &mut pot)?;
        self.publish(sink, Street::Preflop, &pot, &board, false, "blinds posted");

        for _ in 0..2 {
            for &seat in &seats {
                let card = deck.draw()?;
                if let Some(p) = self.state.player_mut(seat) {
                    p.give_card(card)?;
                }
            }
        }
        debug!(players = seats.len(), "hole cards dealt");
        self.publish(sink, Street::Preflop, &pot, &board, false, "hole cards dealt");

        self.run_street(Street::Preflop, bb, &mut pot, &board, source, sink, &mut actions)?;

        for street in [Street::Flop, Street::Turn, Street::River] {
            if self.state.in_hand_count() < 2 {
                break;
            }
            deck.burn()?;
            board.extend(deck.draw_n(street.board_len() - board.len())?);
            for p in self.state.players_mut() {
                p.reset_for_round();
            }
            pot.start_round();
            debug!(?street, board = ?board, "community cards dealt");
            self.publish(sink, street, &pot, &board, false, format!("{:?} dealt", street));
            self.run_street(street, dealer, &mut pot, &board, source, sink, &mut actions)?;
        }

        let refund = self.return_uncalled(&mut pot);
        let showdown = self.showdown(&board);
        let winners = Self::winners(&showdown, self.state.players());
        for entry in &showdown {
            info!(player = %entry.player, rank = %entry.rank, "showdown");
        }
        let final_street = match board.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        };
        self.publish(sink, final_street, &pot, &board, !showdown.is_empty(), "pot awarded");
        let pot_total = pot.take();
        let payouts = split_pot(pot_total, &winners);
        for &(id, chips) in &payouts {
            if let Some(p) = self.state.player_mut(id) {
                p.add_chips(chips);
            }
        }

        let eliminated = self.state.eliminate_busted();
        let wallet_warnings = Self::cash_out(&eliminated, wallet);
        self.state.rotate_dealer();

        info!(
            hand = self.hand_number,
            pot = pot_total,
            winners = ?winners,
            eliminated = eliminated.len(),
            "hand finished"
        );

        Ok(HandOutcome {
            hand_number: self.hand_number,
            seed,
            dealer,
            actions,
            board,
            showdown,
            winners,
            payouts,
            refund,
            pot: pot_total,
            eliminated,
            wallet_warnings,
        })
    }

    /// Posts a forced bet, capped at the player's stack.
    fn post_blind(&mut self, seat: PlayerId, amount: u32, pot: &mut Pot) -> Result<(), GameError> {
        let Some(player) = self.state.player_mut(seat) else {
            return Ok(());
        };
        let posted = amount.min(player.stack());
        player.commit(posted)?;
        pot.add(posted);
        pot.raise_to(player.committed());
        debug!(player = %seat, posted, "blind posted");
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn run_street(
        &mut self,
        street: Street,
        after: PlayerId,
        pot: &mut Pot,
        board: &[Card],
        source: &mut dyn ActionSource,
        sink: &mut dyn PresentationSink,
        actions: &mut Vec<ActionRecord>,
    ) -> Result<(), GameError> {
        let header = SnapshotHeader {
            hand_number: self.hand_number,
            street,
            dealer: self.state.dealer(),
        };
        let big_blind = self.config.big_blind;
        let max_reprompts = self.config.max_reprompts;
        let players = self.state.players_mut();
        let mut round = BettingRound::start(street, players, pot, after, big_blind);
        round.run(players, pot, board, source, max_reprompts, |event, players, pot| {
            let text = match *event {
                RoundEvent::Acted {
                    player,
                    action,
                    applied,
                } => {
                    actions.push(ActionRecord {
                        player,
                        street,
                        action,
                        applied,
                    });
                    format!("{} {}", player, action)
                }
                RoundEvent::ForcedFold { player, attempts } => {
                    actions.push(ActionRecord {
                        player,
                        street,
                        action: PlayerAction::Fold,
                        applied: ValidatedAction::Fold,
                    });
                    format!("{} folded after {} illegal actions", player, attempts)
                }
            };
            sink.publish(&TableSnapshot::capture(header, pot, board, players, false, text));
        })
    }

    fn publish(
        &self,
        sink: &mut dyn PresentationSink,
        street: Street,
        pot: &Pot,
        board: &[Card],
        reveal: bool,
        event: impl Into<String>,
    ) {
        let header = SnapshotHeader {
            hand_number: self.hand_number,
            street,
            dealer: self.state.dealer(),
        };
        sink.publish(&TableSnapshot::capture(
            header,
            pot,
            board,
            self.state.players(),
            reveal,
            event,
        ));
    }

    /// Hands the unmatched top of the largest contribution back to its owner.
    fn return_uncalled(&mut self, pot: &mut Pot) -> Option<(PlayerId, u32)> {
        let contributions: Vec<(PlayerId, u32)> = self
            .state
            .players()
            .iter()
            .filter(|p| p.contributed() > 0)
            .map(|p| (p.id(), p.contributed()))
            .collect();
        let (id, excess) = uncalled_excess(&contributions)?;
        let player = self.state.player_mut(id)?;
        if !player.in_hand() {
            return None;
        }
        player.refund(excess);
        pot.remove(excess);
        debug!(player = %id, excess, "uncalled chips returned");
        Some((id, excess))
    }

    /// Ranks every player still holding cards. Empty when one player is left.
    fn showdown(&self, board: &[Card]) -> Vec<ShowdownEntry> {
        if self.state.in_hand_count() < 2 {
            return Vec::new();
        }
        self.state
            .players()
            .iter()
            .filter(|p| p.in_hand())
            .filter_map(|p| {
                let hole = p.hole_cards()?;
                Some(ShowdownEntry {
                    player: p.id(),
                    hole,
                    rank: evaluate(&hole, board),
                })
            })
            .collect()
    }

    /// Best-ranked entries in seat order, or the lone remaining player.
    fn winners(showdown: &[ShowdownEntry], players: &[Player]) -> Vec<PlayerId> {
        match showdown.iter().map(|e| &e.rank).max() {
            Some(best) => showdown
                .iter()
                .filter(|e| &e.rank == best)
                .map(|e| e.player)
                .collect(),
            None => players
                .iter()
                .filter(|p| p.in_hand())
                .map(|p| p.id())
                .collect(),
        }
    }

    fn cash_out(eliminated: &[PlayerId], wallet: &mut dyn WalletService) -> Vec<WalletWarning> {
        let mut warnings = Vec::new();
        for &id in eliminated {
            info!(player = %id, "player eliminated");
            let balance = wallet.balance(id);
            if balance == 0 {
                continue;
            }
            if let Err(e) = wallet.withdraw(id, balance) {
                warn!(player = %id, error = %e, "cash-out withdraw failed");
                warnings.push(WalletWarning {
                    player: id,
                    message: e.to_string(),
                });
            }
        }
        warnings
    }
}
