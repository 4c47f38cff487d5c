use crate::config::TableConfig;
use crate::errors::GameError;
use crate::player::{Player, PlayerId};

/// Table state that survives from one hand to the next: the seated players
/// and the dealer button.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    dealer: PlayerId,
}

impl GameState {
    /// Seats one player per name, each with the configured starting stack.
    /// The button starts on seat 0.
    pub fn new<S: AsRef<str>>(names: &[S], config: &TableConfig) -> Result<Self, GameError> {
        if names.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        if names.len() > config.max_players {
            return Err(GameError::TableFull {
                max: config.max_players,
            });
        }
        let players = names
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(PlayerId(i), n.as_ref(), config.starting_stack))
            .collect();
        Ok(Self {
            players,
            dealer: PlayerId(0),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0)
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    pub fn in_hand_count(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    /// First non-eliminated seat clockwise after `seat`, wrapping.
    pub fn next_active_after(&self, seat: PlayerId) -> Option<PlayerId> {
        let n = self.players.len();
        (1..=n)
            .map(|step| &self.players[(seat.0 + step) % n])
            .find(|p| p.is_active())
            .map(|p| p.id())
    }

    /// Non-eliminated seats clockwise, starting left of `seat`.
    pub fn active_seats_after(&self, seat: PlayerId) -> Vec<PlayerId> {
        let n = self.players.len();
        (1..=n)
            .map(|step| &self.players[(seat.0 + step) % n])
            .filter(|p| p.is_active())
            .map(|p| p.id())
            .collect()
    }

    /// Moves the button one seat to the next player still in the game.
    pub fn rotate_dealer(&mut self) {
        if let Some(next) = self.next_active_after(self.dealer) {
            self.dealer = next;
        }
    }

    /// Marks every player with an empty stack as eliminated and returns them.
    pub fn eliminate_busted(&mut self) -> Vec<PlayerId> {
        let mut out: Vec<PlayerId> = Vec::new();
        for p in self.players.iter_mut() {
            if p.is_active() && p.stack() == 0 {
                p.eliminate();
                out.push(p.id());
            }
        }
        out
    }

    /// Total chips on the table, pot excluded.
    pub fn chips_in_play(&self) -> u64 {
        self.players.iter().map(|p| p.stack() as u64).sum()
    }
}
