use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Insufficient stack: requested {requested}, available {available}")]
    InsufficientStack { requested: u32, available: u32 },
    #[error("Not enough players to start a hand")]
    NotEnoughPlayers,
    #[error("Table is full ({max} seats)")]
    TableFull { max: usize },
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Betting round already complete")]
    RoundComplete,
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}

/// Reasons an action is refused by the betting engine. Refusals never mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("cannot check while facing {to_call} to call")]
    CannotCheck { to_call: u32 },
    #[error("nothing to call")]
    NothingToCall,
    #[error("raise to {amount} is below the minimum of {minimum}")]
    RaiseTooSmall { amount: u32, minimum: u32 },
    #[error("it's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("{0} can no longer act this hand")]
    PlayerInactive(PlayerId),
}
