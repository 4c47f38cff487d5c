use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::history::Street;
use crate::player::{Player, PlayerId};
use crate::pot::Pot;

/// Public view of one seat. Hole cards are only filled in at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub stack: u32,
    pub committed: u32,
    pub folded: bool,
    pub all_in: bool,
    pub eliminated: bool,
    #[serde(default)]
    pub shown: Option<HoleCards>,
}

impl PlayerView {
    pub fn of(player: &Player, reveal: bool) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            stack: player.stack(),
            committed: player.committed(),
            folded: player.is_folded(),
            all_in: player.is_all_in(),
            eliminated: player.is_eliminated(),
            shown: if reveal && player.in_hand() {
                player.hole_cards()
            } else {
                None
            },
        }
    }
}

/// Read-only table state published after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u32,
    pub street: Street,
    pub pot: u32,
    pub current_bet: u32,
    pub board: Vec<Card>,
    pub dealer: PlayerId,
    pub players: Vec<PlayerView>,
    /// Short description of what just happened
    pub event: String,
}

/// The parts of a snapshot that stay fixed for a whole street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub hand_number: u32,
    pub street: Street,
    pub dealer: PlayerId,
}

impl TableSnapshot {
    pub fn capture(
        header: SnapshotHeader,
        pot: &Pot,
        board: &[Card],
        players: &[Player],
        reveal: bool,
        event: impl Into<String>,
    ) -> Self {
        Self {
            hand_number: header.hand_number,
            street: header.street,
            pot: pot.total(),
            current_bet: pot.current_bet(),
            board: board.to_vec(),
            dealer: header.dealer,
            players: players.iter().map(|p| PlayerView::of(p, reveal)).collect(),
            event: event.into(),
        }
    }
}

/// Receives snapshots; never feeds anything back into the game.
pub trait PresentationSink {
    fn publish(&mut self, snapshot: &TableSnapshot);
}

/// Discards every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn publish(&mut self, _snapshot: &TableSnapshot) {}
}

impl PresentationSink for Vec<TableSnapshot> {
    fn publish(&mut self, snapshot: &TableSnapshot) {
        self.push(snapshot.clone());
    }
}
